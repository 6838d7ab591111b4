// 绘制选项
//
// 调用方的配置记录。布局参数与绘制参数各自带有一组默认值，
// 调用方提供的同名键覆盖默认值（后写入者优先），未知键原样转发。

use crate::error::Result;
use crate::mapping::SizeRange;
use crate::values::Value;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// 选项名到值的扁平映射
pub type OptionMap = serde_json::Map<String, serde_json::Value>;

pub(crate) fn option_map<'a>(
    entries: impl IntoIterator<Item = (&'a str, serde_json::Value)>,
) -> OptionMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// 绘制参数默认值
pub fn default_draw_options() -> OptionMap {
    option_map([
        ("pos", json!(null)),
        ("vorder", json!(null)),
        ("eorder", json!(null)),
        ("nodesfirst", json!(false)),
        ("output_size", json!([600, 600])),
        ("fit_view", json!(true)),
        ("fit_view_ink", json!(null)),
        ("adjust_aspect", json!(true)),
        ("ink_scale", json!(1)),
        ("inline", json!(true)),
        ("inline_scale", json!(2)),
        ("yflip", json!(true)),
        ("output", json!(null)),
        ("fmt", json!("auto")),
        ("bg_color", json!(null)),
        ("antialias", json!(null)),
    ])
}

/// 合并：overrides 中的键覆盖 defaults
pub fn merge_options(mut defaults: OptionMap, overrides: &OptionMap) -> OptionMap {
    for (key, value) in overrides {
        defaults.insert(key.clone(), value.clone());
    }
    defaults
}

/// 一次绘制的调用方配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// 顶点名称（顶点文本）
    pub node_names: Option<Vec<String>>,
    /// 映射为顶点颜色的属性
    pub node_color: Option<Vec<Value>>,
    /// 映射为顶点大小的属性
    pub node_size: Option<Vec<f64>>,
    /// 顶点颜色的透明度
    pub alpha: f64,
    /// 顶点大小范围
    pub size_range: SizeRange,
    /// 是否显示边权重文本
    pub edge_weight_text: bool,
    /// 是否按权重设置线宽
    pub edge_weight_width: bool,
    /// 边权重文本格式
    pub edge_weight_text_format: String,
    /// 线宽缩放系数
    pub edge_weight_width_scale: f64,
    /// 布局参数覆盖
    pub layout_options: OptionMap,
    /// 绘制参数覆盖
    pub draw_options: OptionMap,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            node_names: None,
            node_color: None,
            node_size: None,
            alpha: 1.0,
            size_range: SizeRange::default(),
            edge_weight_text: true,
            edge_weight_width: true,
            edge_weight_text_format: ".2f".to_string(),
            edge_weight_width_scale: 1.0,
            layout_options: OptionMap::new(),
            draw_options: OptionMap::new(),
        }
    }
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 加载，缺失字段取默认值
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_node_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.node_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_node_color<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.node_color = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_node_size(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.node_size = Some(values.into());
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_size_range(mut self, min: f64, max: f64) -> Self {
        self.size_range = SizeRange::new(min, max);
        self
    }

    pub fn with_edge_weight_text(mut self, enabled: bool) -> Self {
        self.edge_weight_text = enabled;
        self
    }

    pub fn with_edge_weight_width(mut self, enabled: bool) -> Self {
        self.edge_weight_width = enabled;
        self
    }

    pub fn with_text_format(mut self, spec: impl Into<String>) -> Self {
        self.edge_weight_text_format = spec.into();
        self
    }

    pub fn with_width_scale(mut self, scale: f64) -> Self {
        self.edge_weight_width_scale = scale;
        self
    }

    /// 设置单个布局参数
    pub fn with_layout_option(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.layout_options.insert(key.to_string(), value.into());
        self
    }

    /// 设置单个绘制参数
    pub fn with_draw_option(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.draw_options.insert(key.to_string(), value.into());
        self
    }
}
