use crate::error::{Error, Result};
use crate::mapping::normalize::{check_finite, is_constant, normalize};
use serde::{Deserialize, Serialize};

/// 顶点大小范围
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 50.0,
        }
    }
}

impl SizeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(Error::InvalidOption(format!(
                "size range {}..{} is not a finite ascending range",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// 归一化后线性缩放到 [min, max]；常量输入全部为 min
pub fn map_sizes(values: &[f64], range: SizeRange) -> Result<Vec<f64>> {
    range.validate()?;
    check_finite(values)?;
    if is_constant(values) {
        tracing::warn!(len = values.len(), min = range.min, "constant size attribute, all vertices get the minimum size");
    }

    let span = range.max - range.min;
    Ok(normalize(values)
        .into_iter()
        .map(|x| range.min + x * span)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_sizes_default_range() {
        let sizes = map_sizes(&[0.0, 5.0, 10.0], SizeRange::default()).unwrap();
        assert_eq!(sizes, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_map_sizes_constant() {
        let sizes = map_sizes(&[10.0, 10.0, 10.0], SizeRange::default()).unwrap();
        assert_eq!(sizes, vec![10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_map_sizes_rejects_inverted_range() {
        assert!(matches!(
            map_sizes(&[1.0], SizeRange::new(20.0, 5.0)),
            Err(Error::InvalidOption(_))
        ));
    }
}
