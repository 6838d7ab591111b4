use crate::error::{Error, Result};
use crate::values::{Category, Value};
use std::collections::BTreeSet;

/// 分类调色板的最大条目数
pub const MAX_CATEGORIES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Continuous,
    Categorical,
}

/// 属性序列
///
/// 连续还是分类在构造时决定一次，映射函数只按变体分派。
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeSequence {
    Continuous(Vec<f64>),
    Categorical(Vec<Category>),
}

impl AttributeSequence {
    pub fn continuous(values: impl Into<Vec<f64>>) -> Self {
        AttributeSequence::Continuous(values.into())
    }

    pub fn categorical<C: Into<Category>>(values: impl IntoIterator<Item = C>) -> Self {
        AttributeSequence::Categorical(values.into_iter().map(Into::into).collect())
    }

    /// 根据元素的声明类型推断
    ///
    /// 含有 Float，或者不同取值超过 10 个，视为连续；否则为分类。
    /// 超过 10 个文本类别无法映射，返回 `PaletteExhausted`。
    pub fn infer(values: &[Value]) -> Result<Self> {
        if values.iter().any(Value::is_float) {
            tracing::debug!(len = values.len(), "float attribute, mapping as continuous");
            return Self::numeric(values);
        }

        let categories: Vec<Category> = values
            .iter()
            .filter_map(|v| Category::try_from(v).ok())
            .collect();
        let distinct = categories.iter().collect::<BTreeSet<_>>().len();

        if distinct <= MAX_CATEGORIES {
            tracing::debug!(len = values.len(), distinct, "mapping attribute as categorical");
            return Ok(AttributeSequence::Categorical(categories));
        }

        if values.iter().any(|v| matches!(v, Value::Text(_))) {
            return Err(Error::PaletteExhausted {
                distinct,
                max: MAX_CATEGORIES,
            });
        }
        tracing::debug!(len = values.len(), distinct, "too many categories, mapping as continuous");
        Self::numeric(values)
    }

    fn numeric(values: &[Value]) -> Result<Self> {
        values
            .iter()
            .enumerate()
            .map(|(index, v)| v.as_f64().ok_or(Error::NotNumeric { index }))
            .collect::<Result<Vec<_>>>()
            .map(AttributeSequence::Continuous)
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeSequence::Continuous(_) => AttributeKind::Continuous,
            AttributeSequence::Categorical(_) => AttributeKind::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AttributeSequence::Continuous(v) => v.len(),
            AttributeSequence::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
