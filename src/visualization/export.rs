// 渲染适配器
//
// 渲染配置与外部绘制工具之间唯一的边界：
// - JSON 格式（完整配置，交给任意前端或绘图脚本）
// - Graphviz DOT 格式（sfdp 力导向引擎）

use crate::error::Result;
use crate::mapping::Rgba;
use crate::visualization::layout::sfdp_attributes;
use crate::visualization::RenderConfig;
use serde_json::json;

/// 渲染适配器trait
pub trait Renderer {
    /// 把渲染配置转换为目标格式
    fn render(&self, config: &RenderConfig) -> Result<String>;

    /// 格式名称，对应绘制参数 fmt
    fn format(&self) -> &'static str;
}

/// JSON导出
///
/// graph 为顶点数和边集，layout 为布局参数，draw 为绘制参数及视觉属性
pub struct JsonExport;

impl Renderer for JsonExport {
    fn render(&self, config: &RenderConfig) -> Result<String> {
        let doc = json!({
            "graph": {
                "directed": config.is_directed(),
                "num_vertices": config.num_vertices(),
                "edges": config.edges(),
            },
            "layout": config.layout_options(),
            "draw": config.draw_section()?,
        });

        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn format(&self) -> &'static str {
        "json"
    }
}

/// Graphviz DOT导出
///
/// 顶点大小按 72 点每英寸换算为 width，颜色输出为 #RRGGBBAA
pub struct DotExport;

const POINTS_PER_INCH: f64 = 72.0;

impl Renderer for DotExport {
    fn render(&self, config: &RenderConfig) -> Result<String> {
        let mut dot = String::new();
        let draw = config.draw_options();

        let (keyword, edge_op) = if config.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };
        dot.push_str(&format!("{} G {{\n", keyword));

        // 全局设置
        dot.push_str("  layout=sfdp;\n");
        for (attr, value) in sfdp_attributes(config.layout_options()) {
            dot.push_str(&format!("  {}={};\n", attr, value));
        }
        if let Some(size) = canvas_size(draw) {
            dot.push_str(&format!("  size=\"{}\";\n", size));
        }
        if let Some(bg) = draw.get("bg_color").and_then(color_option) {
            dot.push_str(&format!("  bgcolor=\"{}\";\n", bg));
        }
        dot.push_str("  node [shape=circle, style=filled];\n");
        dot.push_str(&format!(
            "  // Vertices: {}, Edges: {}\n",
            config.num_vertices(),
            config.edges().len()
        ));
        dot.push('\n');

        // 添加顶点
        for v in 0..config.num_vertices() {
            let mut attrs = Vec::new();

            if let Some(text) = config.vertex_text().and_then(|p| p.get(v)) {
                attrs.push(format!("label=\"{}\"", escape_dot_string(text)));
            }
            if let Some(color) = config.vertex_fill_color().and_then(|p| p.get(v)) {
                attrs.push(format!("fillcolor=\"{}\"", color.to_hex()));
            }
            if let Some(size) = config.vertex_size().and_then(|p| p.get(v)) {
                attrs.push(format!("width={:.3}, fixedsize=true", size / POINTS_PER_INCH));
            }

            dot.push_str(&format!("  {}", v));
            if !attrs.is_empty() {
                dot.push_str(&format!(" [{}]", attrs.join(", ")));
            }
            dot.push_str(";\n");
        }

        dot.push('\n');

        // 添加边
        for (i, (source, target)) in config.edges().iter().enumerate() {
            let mut attrs = Vec::new();

            if let Some(text) = config.edge_text().and_then(|p| p.get(i)) {
                attrs.push(format!("label=\"{}\"", escape_dot_string(text)));
            }
            if let Some(width) = config.edge_pen_width().and_then(|p| p.get(i)) {
                attrs.push(format!("penwidth={}", width));
            }

            dot.push_str(&format!("  {} {} {}", source, edge_op, target));
            if !attrs.is_empty() {
                dot.push_str(&format!(" [{}]", attrs.join(", ")));
            }
            dot.push_str(";\n");
        }

        dot.push_str("}\n");

        Ok(dot)
    }

    fn format(&self) -> &'static str {
        "dot"
    }
}

// output_size 为像素，DOT 的 size 为英寸；fit_view 时加 "!" 放大填满画布
fn canvas_size(draw: &crate::visualization::OptionMap) -> Option<String> {
    let dims = draw.get("output_size")?.as_array()?;
    let (w, h) = (dims.first()?.as_f64()?, dims.get(1)?.as_f64()?);
    let fill = draw.get("fit_view").and_then(|v| v.as_bool()).unwrap_or(false);
    Some(format!(
        "{:.2},{:.2}{}",
        w / POINTS_PER_INCH,
        h / POINTS_PER_INCH,
        if fill { "!" } else { "" }
    ))
}

// 颜色参数可以是颜色名字符串或 [r, g, b, a] 分量
fn color_option(value: &serde_json::Value) -> Option<String> {
    if let Some(s) = value.as_str() {
        return Some(s.to_string());
    }
    let c = value.as_array()?;
    let channel = |i: usize| c.get(i).and_then(|v| v.as_f64());
    Some(Rgba::new(channel(0)?, channel(1)?, channel(2)?, channel(3).unwrap_or(1.0)).to_hex())
}

/// 转义DOT字符串
fn escape_dot_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
