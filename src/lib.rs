//! 图属性可视化
//!
//! 把图的顶点/边属性映射为视觉属性（颜色、大小、文本、线宽），
//! 与布局参数、绘制参数一起组装成渲染配置，交给外部绘制工具。

pub mod error;
pub mod values;
pub mod graph;
pub mod mapping;
pub mod visualization;

pub use crate::error::{Error, Result};
pub use crate::graph::{extract_components, GraphData};
pub use crate::mapping::{AttributeSequence, Entity, Rgba, VisualProperty};
pub use crate::values::{Category, Value};
pub use crate::visualization::{assemble, plot, DotExport, JsonExport, PlotOptions, RenderConfig, Renderer};
