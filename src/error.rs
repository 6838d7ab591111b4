// 错误类型
//
// 所有映射阶段的错误都在产生任何输出之前检测，直接返回给调用方。

use crate::mapping::Entity;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Shape mismatch: {entity} attribute has {actual} entries, expected {expected}")]
    ShapeMismatch {
        entity: Entity,
        expected: usize,
        actual: usize,
    },

    #[error("Palette exhausted: {distinct} distinct categories, palette holds at most {max}")]
    PaletteExhausted { distinct: usize, max: usize },

    #[error("Non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    #[error("Non-numeric value at index {index}")]
    NotNumeric { index: usize },

    #[error("Edge {index} ({from} -> {to}) references a node outside 0..{num_nodes}")]
    InvalidEdge {
        index: usize,
        from: usize,
        to: usize,
        num_nodes: usize,
    },

    #[error("Unsupported weight format: {0:?}")]
    InvalidFormat(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
