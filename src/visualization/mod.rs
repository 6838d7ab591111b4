// 图可视化模块
//
// 把输入图和调用方选项组装成一份渲染配置，交给渲染适配器：
// - 提取边集和权重
// - 属性映射（颜色、大小、文本、线宽）
// - 布局参数与绘制参数的默认值合并
// - DOT / JSON 导出

pub mod options;
pub mod layout;
pub mod export;

pub use options::{default_draw_options, merge_options, OptionMap, PlotOptions};
pub use layout::{default_layout_options, sfdp_attributes};
pub use export::{DotExport, JsonExport, Renderer};

use crate::error::Result;
use crate::graph::{extract_components, GraphData, Link};
use crate::mapping::{
    ensure_len, format_weights, map_colors, map_labels, map_sizes, AttributeSequence, Entity,
    Rgba, VisualProperty, WeightFormat,
};

/// 渲染配置
///
/// 组装后不可变，整体交给一次渲染调用。
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    directed: bool,
    num_vertices: usize,
    edges: Vec<Link>,
    layout_options: OptionMap,
    draw_options: OptionMap,
    vertex_fill_color: Option<VisualProperty<Rgba>>,
    vertex_size: Option<VisualProperty<f64>>,
    vertex_text: Option<VisualProperty<String>>,
    edge_text: Option<VisualProperty<String>>,
    edge_pen_width: Option<VisualProperty<f64>>,
}

impl RenderConfig {
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn edges(&self) -> &[Link] {
        &self.edges
    }

    pub fn layout_options(&self) -> &OptionMap {
        &self.layout_options
    }

    /// 合并后的绘制参数（不含视觉属性）
    pub fn draw_options(&self) -> &OptionMap {
        &self.draw_options
    }

    pub fn vertex_fill_color(&self) -> Option<&VisualProperty<Rgba>> {
        self.vertex_fill_color.as_ref()
    }

    pub fn vertex_size(&self) -> Option<&VisualProperty<f64>> {
        self.vertex_size.as_ref()
    }

    pub fn vertex_text(&self) -> Option<&VisualProperty<String>> {
        self.vertex_text.as_ref()
    }

    pub fn edge_text(&self) -> Option<&VisualProperty<String>> {
        self.edge_text.as_ref()
    }

    pub fn edge_pen_width(&self) -> Option<&VisualProperty<f64>> {
        self.edge_pen_width.as_ref()
    }

    /// 绘制参数加上已请求的视觉属性，键名与绘制调用一致
    pub fn draw_section(&self) -> Result<OptionMap> {
        let mut section = self.draw_options.clone();
        if let Some(p) = &self.vertex_fill_color {
            section.insert("vertex_fill_color".into(), serde_json::to_value(p.as_slice())?);
        }
        if let Some(p) = &self.vertex_size {
            section.insert("vertex_size".into(), serde_json::to_value(p.as_slice())?);
        }
        if let Some(p) = &self.vertex_text {
            section.insert("vertex_text".into(), serde_json::to_value(p.as_slice())?);
        }
        if let Some(p) = &self.edge_text {
            section.insert("edge_text".into(), serde_json::to_value(p.as_slice())?);
        }
        if let Some(p) = &self.edge_pen_width {
            section.insert("edge_pen_width".into(), serde_json::to_value(p.as_slice())?);
        }
        Ok(section)
    }

    /// draw_options 中的输出路径
    pub fn output_path(&self) -> Option<&str> {
        self.draw_options.get("output").and_then(|v| v.as_str())
    }
}

/// 组装渲染配置
///
/// 先校验所有选项和属性长度，再做映射；任何一步失败都不会产生部分结果。
pub fn assemble(graph: &GraphData, options: &PlotOptions) -> Result<RenderConfig> {
    let text_format: WeightFormat = options.edge_weight_text_format.parse()?;
    let parts = extract_components(graph)?;
    let n = parts.num_nodes;

    if let Some(names) = &options.node_names {
        ensure_len(Entity::Vertex, n, names.len())?;
    }
    if let Some(values) = &options.node_color {
        ensure_len(Entity::Vertex, n, values.len())?;
    }
    if let Some(values) = &options.node_size {
        ensure_len(Entity::Vertex, n, values.len())?;
    }

    let vertex_text = map_labels(options.node_names.as_deref(), Entity::Vertex, n)?
        .map(|labels| VisualProperty::new(Entity::Vertex, n, labels))
        .transpose()?;

    let vertex_fill_color = options
        .node_color
        .as_deref()
        .map(|values| {
            let seq = AttributeSequence::infer(values)?;
            VisualProperty::new(Entity::Vertex, n, map_colors(&seq, options.alpha)?)
        })
        .transpose()?;

    let vertex_size = options
        .node_size
        .as_deref()
        .map(|values| {
            VisualProperty::new(Entity::Vertex, n, map_sizes(values, options.size_range)?)
        })
        .transpose()?;

    let (mut edge_text, mut edge_pen_width) = (None, None);
    if options.edge_weight_text || options.edge_weight_width {
        let m = parts.edge_count();
        let (text, pen_width) =
            format_weights(&parts.weights, &text_format, options.edge_weight_width_scale)?;
        if options.edge_weight_text {
            edge_text = Some(VisualProperty::new(Entity::Edge, m, text)?);
        }
        if options.edge_weight_width {
            edge_pen_width = Some(VisualProperty::new(Entity::Edge, m, pen_width)?);
        }
    }

    let layout_options = merge_options(default_layout_options(), &options.layout_options);
    let draw_options = merge_options(default_draw_options(), &options.draw_options);

    tracing::debug!(
        vertices = n,
        edges = parts.edge_count(),
        vertex_color = vertex_fill_color.is_some(),
        vertex_size = vertex_size.is_some(),
        vertex_text = vertex_text.is_some(),
        edge_text = edge_text.is_some(),
        edge_pen_width = edge_pen_width.is_some(),
        "assembled render config"
    );

    Ok(RenderConfig {
        directed: parts.directed,
        num_vertices: n,
        edges: parts.links,
        layout_options,
        draw_options,
        vertex_fill_color,
        vertex_size,
        vertex_text,
        edge_text,
        edge_pen_width,
    })
}

/// 组装并渲染；draw_options 指定了 output 时同时写入该文件
pub fn plot(graph: &GraphData, options: &PlotOptions, renderer: &dyn Renderer) -> Result<String> {
    let config = assemble(graph, options)?;

    if let Some(fmt) = config.draw_options().get("fmt").and_then(|v| v.as_str()) {
        if fmt != "auto" && fmt != renderer.format() {
            tracing::warn!(requested = fmt, renderer = renderer.format(), "fmt option does not match renderer");
        }
    }

    let rendered = renderer.render(&config)?;

    if let Some(path) = config.output_path() {
        std::fs::write(path, &rendered)?;
        tracing::info!(path, bytes = rendered.len(), "wrote rendered graph");
    }

    Ok(rendered)
}
