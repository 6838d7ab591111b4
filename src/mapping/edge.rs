// 边权重格式化
//
// 权重同时映射为显示文本和线宽。线宽为 weight / max(weight) * scale，
// 最大权重为 0 时所有线宽定义为 0。

use crate::error::{Error, Result};
use crate::mapping::normalize::{check_finite, value_range};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatKind {
    /// 空格式：最短可往返表示
    Plain,
    Fixed,
    Exponent { upper: bool },
    General,
    /// 只有精度没有类型（`.2`）：同 g，但定点表示至少保留一位小数
    GeneralPoint,
    Percent,
}

/// 精度上限
pub const MAX_PRECISION: usize = 100;

/// 数值格式，语法同 Python 的浮点格式说明（`.2f`、`.3e`、`.1%`、`g`、`.2`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightFormat {
    kind: FormatKind,
    precision: Option<usize>,
}

impl Default for WeightFormat {
    fn default() -> Self {
        Self {
            kind: FormatKind::Fixed,
            precision: Some(2),
        }
    }
}

fn spec_regex() -> Result<&'static Regex> {
    static SPEC: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = SPEC.get() {
        return Ok(re);
    }
    let re = Regex::new(r"^(?:\.(\d+))?([fFeEg%])?$")
        .map_err(|e| Error::InvalidFormat(e.to_string()))?;
    Ok(SPEC.get_or_init(|| re))
}

impl FromStr for WeightFormat {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormat(spec.to_string());
        let caps = spec_regex()?.captures(spec).ok_or_else(invalid)?;

        let precision = caps
            .get(1)
            .map(|m| m.as_str().parse::<usize>())
            .transpose()
            .map_err(|_| invalid())?;
        if precision.is_some_and(|p| p > MAX_PRECISION) {
            return Err(invalid());
        }

        let kind = match caps.get(2).map(|m| m.as_str()) {
            None if precision.is_some() => FormatKind::GeneralPoint,
            None => FormatKind::Plain,
            Some("f") | Some("F") => FormatKind::Fixed,
            Some("e") => FormatKind::Exponent { upper: false },
            Some("E") => FormatKind::Exponent { upper: true },
            Some("g") => FormatKind::General,
            Some("%") => FormatKind::Percent,
            _ => return Err(invalid()),
        };

        Ok(Self { kind, precision })
    }
}

impl WeightFormat {
    pub fn format(&self, value: f64) -> String {
        let p = self.precision.unwrap_or(6);
        match self.kind {
            FormatKind::Plain => plain(value),
            FormatKind::Fixed => format!("{:.*}", p, value),
            FormatKind::Exponent { upper } => {
                let s = exponent(value, p);
                if upper {
                    s.to_uppercase()
                } else {
                    s
                }
            }
            FormatKind::General => general(value, p.max(1)),
            FormatKind::GeneralPoint => with_point(general(value, p.max(1))),
            FormatKind::Percent => format!("{:.*}%", p, value * 100.0),
        }
    }
}

impl fmt::Display for WeightFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = self.precision {
            write!(f, ".{}", p)?;
        }
        let suffix = match self.kind {
            FormatKind::Plain => "",
            FormatKind::Fixed => "f",
            FormatKind::Exponent { upper: false } => "e",
            FormatKind::Exponent { upper: true } => "E",
            FormatKind::General => "g",
            FormatKind::GeneralPoint => "",
            FormatKind::Percent => "%",
        };
        f.write_str(suffix)
    }
}

// 1.5e3 -> 1.50e+03
fn exponent(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}

fn general(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let sci = format!("{:.*e}", precision - 1, value);
    let exp: i32 = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let s = exponent(value, precision - 1);
        match s.split_once('e') {
            Some((mantissa, e)) => format!("{}e{}", trim_zeros(mantissa), e),
            None => s,
        }
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

// 与 Python repr 一致：指数在 [-4, 16) 内用定点，否则用科学计数法
fn plain(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let shortest = format!("{:e}", value);
    let Some((mantissa, exp)) = shortest.split_once('e') else {
        return shortest;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..16).contains(&exp) {
        with_point(format!("{}", value))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

// 定点表示没有小数点时补 ".0"
fn with_point(s: String) -> String {
    if s.contains(['.', 'e', 'N', 'i']) {
        s
    } else {
        s + ".0"
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// 线宽：weight / max(weight) * width_scale
pub fn pen_widths(weights: &[f64], width_scale: f64) -> Result<Vec<f64>> {
    if !width_scale.is_finite() || width_scale < 0.0 {
        return Err(Error::InvalidOption(format!(
            "edge width scale {} must be finite and non-negative",
            width_scale
        )));
    }
    check_finite(weights)?;

    let Some((_, max)) = value_range(weights) else {
        return Ok(Vec::new());
    };

    if max == 0.0 {
        tracing::warn!(edges = weights.len(), "maximum edge weight is 0, all pen widths are 0");
        return Ok(vec![0.0; weights.len()]);
    }

    Ok(weights.iter().map(|w| w / max * width_scale).collect())
}

/// 权重的显示文本和线宽
pub fn format_weights(
    weights: &[f64],
    text_format: &WeightFormat,
    width_scale: f64,
) -> Result<(Vec<String>, Vec<f64>)> {
    let pen_width = pen_widths(weights, width_scale)?;
    let text = weights.iter().map(|&w| text_format.format(w)).collect();
    Ok((text, pen_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(spec: &str, v: f64) -> String {
        spec.parse::<WeightFormat>().unwrap().format(v)
    }

    #[test]
    fn test_format_specs() {
        assert_eq!(fmt(".2f", 1.0), "1.00");
        assert_eq!(fmt(".1f", 2.24), "2.2");
        assert_eq!(fmt("f", 0.5), "0.500000");
        assert_eq!(fmt(".2e", 1500.0), "1.50e+03");
        assert_eq!(fmt(".1E", 0.00012), "1.2E-04");
        assert_eq!(fmt(".1%", 0.25), "25.0%");
        assert_eq!(fmt("g", 0.5), "0.5");
        assert_eq!(fmt(".3g", 1234.0), "1.23e+03");
        assert_eq!(fmt("", 1.0), "1.0");
    }

    #[test]
    fn test_plain_matches_repr() {
        assert_eq!(fmt("", 0.0), "0.0");
        assert_eq!(fmt("", 123.456), "123.456");
        assert_eq!(fmt("", 0.0001), "0.0001");
        assert_eq!(fmt("", 1e-5), "1e-05");
        assert_eq!(fmt("", 2.5e16), "2.5e+16");
    }

    #[test]
    fn test_precision_without_type_keeps_point() {
        assert_eq!(fmt(".2", 1.0), "1.0");
        assert_eq!(fmt(".2", 0.0), "0.0");
        assert_eq!(fmt(".3", 2.5), "2.5");
        assert_eq!(fmt(".2", 1234.0), "1.2e+03");
    }

    #[test]
    fn test_format_rejects_unknown_spec() {
        assert!("x".parse::<WeightFormat>().is_err());
        assert!(".2d".parse::<WeightFormat>().is_err());
        assert!("d".parse::<WeightFormat>().is_err());
        assert!("2f".parse::<WeightFormat>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for spec in [".2f", ".3e", ".1%", "g", ".2", ""] {
            assert_eq!(spec.parse::<WeightFormat>().unwrap().to_string(), spec);
        }
    }

    #[test]
    fn test_format_weights() {
        let (text, pen) = format_weights(&[1.0, 2.0, 4.0], &WeightFormat::default(), 5.0).unwrap();
        assert_eq!(text, vec!["1.00", "2.00", "4.00"]);
        assert_eq!(pen, vec![1.25, 2.5, 5.0]);
    }

    #[test]
    fn test_precision_cap() {
        assert!(".100f".parse::<WeightFormat>().is_ok());
        assert!(matches!(
            ".101f".parse::<WeightFormat>(),
            Err(Error::InvalidFormat(_))
        ));
        assert!(".1000000000f".parse::<WeightFormat>().is_err());
    }

    #[test]
    fn test_negative_weights_follow_ratio() {
        assert_eq!(pen_widths(&[-1.0, 2.0], 1.0).unwrap(), vec![-0.5, 1.0]);
        assert_eq!(pen_widths(&[-2.0, -1.0], 1.0).unwrap(), vec![2.0, 1.0]);
        assert_eq!(pen_widths(&[-3.0, 0.0], 2.0).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_all_zero_weights() {
        let pen = pen_widths(&[0.0, 0.0], 3.0).unwrap();
        assert_eq!(pen, vec![0.0, 0.0]);
    }
}
