// 属性到视觉属性的映射
//
// 纯函数：输入属性序列，输出每个实体（顶点或边）一个视觉值。
// 不依赖任何渲染库，渲染相关的交互集中在 visualization 模块。

pub mod attribute;
pub mod normalize;
pub mod color;
pub mod size;
pub mod label;
pub mod edge;

pub use attribute::{AttributeKind, AttributeSequence, MAX_CATEGORIES};
pub use normalize::normalize;
pub use color::{map_colors, palette, spring, Rgba};
pub use size::{map_sizes, SizeRange};
pub use label::map_labels;
pub use edge::{format_weights, pen_widths, WeightFormat};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 视觉属性所标注的实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Vertex,
    Edge,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Vertex => write!(f, "vertex"),
            Entity::Edge => write!(f, "edge"),
        }
    }
}

/// 实体索引到视觉值的映射，每个实体恰好一项
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualProperty<T> {
    entity: Entity,
    values: Vec<T>,
}

impl<T> VisualProperty<T> {
    /// 创建视觉属性，长度必须等于实体数量
    pub fn new(entity: Entity, expected: usize, values: Vec<T>) -> Result<Self> {
        ensure_len(entity, expected, values.len())?;
        Ok(Self { entity, values })
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

/// 检查属性序列长度与实体数量一致
pub fn ensure_len(entity: Entity, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::ShapeMismatch {
            entity,
            expected,
            actual,
        });
    }
    Ok(())
}
