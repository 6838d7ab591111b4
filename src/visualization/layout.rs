// 力导向布局参数
//
// 布局由外部引擎计算，这里只维护参数默认值，
// 并把其中有对应关系的参数翻译成 Graphviz sfdp 的图属性。

use crate::visualization::options::{option_map, OptionMap};
use serde_json::json;

/// 布局参数默认值（null 表示由引擎决定）
pub fn default_layout_options() -> OptionMap {
    option_map([
        ("vweight", json!(null)),
        ("eweight", json!(null)),
        ("pin", json!(null)),
        ("C", json!(0.2)),
        ("K", json!(null)),
        ("p", json!(2.0)),
        ("theta", json!(0.6)),
        ("max_level", json!(15)),
        ("r", json!(1.0)),
        ("kc", json!(10)),
        ("groups", json!(null)),
        ("gamma", json!(0.1)),
        ("mu", json!(2.0)),
        ("kappa", json!(1.0)),
        ("rmap", json!(null)),
        ("R", json!(1)),
        ("init_step", json!(null)),
        ("cooling_step", json!(0.95)),
        ("adaptive_cooling", json!(true)),
        ("epsilon", json!(0.01)),
        ("max_iter", json!(0)),
        ("pos", json!(null)),
        ("multilevel", json!(null)),
        ("coarse_method", json!("hybrid")),
        ("mivs_thres", json!(0.9)),
        ("ec_thres", json!(0.75)),
        ("weighted_coarse", json!(false)),
        ("verbose", json!(false)),
    ])
}

// (布局参数, sfdp 属性)
const SFDP_ATTRIBUTES: &[(&str, &str)] = &[
    ("K", "K"),
    ("p", "repulsiveforce"),
    ("max_level", "levels"),
    ("max_iter", "maxiter"),
];

/// 可以交给 sfdp 的布局参数
///
/// 只输出数值参数；null 和 max_iter=0（不限制）不输出。
pub fn sfdp_attributes(options: &OptionMap) -> Vec<(&'static str, String)> {
    SFDP_ATTRIBUTES
        .iter()
        .filter_map(|&(key, attr)| {
            let value = options.get(key)?.as_f64()?;
            if key == "max_iter" && value <= 0.0 {
                return None;
            }
            Some((attr, format!("{}", value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_options() {
        let opts = default_layout_options();
        assert_eq!(opts["C"], json!(0.2));
        assert_eq!(opts["coarse_method"], json!("hybrid"));
        assert_eq!(opts["adaptive_cooling"], json!(true));
        assert!(opts["K"].is_null());
    }

    #[test]
    fn test_sfdp_attributes() {
        let mut opts = default_layout_options();
        assert_eq!(
            sfdp_attributes(&opts),
            vec![("repulsiveforce", "2".to_string()), ("levels", "15".to_string())]
        );

        opts.insert("K".to_string(), json!(0.5));
        opts.insert("max_iter".to_string(), json!(200));
        let attrs = sfdp_attributes(&opts);
        assert!(attrs.contains(&("K", "0.5".to_string())));
        assert!(attrs.contains(&("maxiter", "200".to_string())));
    }
}
