use serde::{Deserialize, Serialize};

/// 调用方提供的属性值
///
/// JSON 中的 `1` 解析为 `Int`，`1.0` 解析为 `Float`，这决定了颜色映射走连续还是分类路径。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// 数值视图（Text 没有数值）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// 分类属性的键
///
/// 可排序、可哈希；不同变体之间按 Bool < Int < Text 排序。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl TryFrom<&Value> for Category {
    type Error = ();

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        match v {
            Value::Int(i) => Ok(Category::Int(*i)),
            Value::Bool(b) => Ok(Category::Bool(*b)),
            Value::Text(s) => Ok(Category::Text(s.clone())),
            Value::Float(_) => Err(()),
        }
    }
}

impl From<i64> for Category {
    fn from(v: i64) -> Self {
        Category::Int(v)
    }
}

impl From<&str> for Category {
    fn from(v: &str) -> Self {
        Category::Text(v.to_string())
    }
}
