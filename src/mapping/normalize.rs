use crate::error::{Error, Result};

/// 线性归一化到 [0, 1]
///
/// 常量序列（max == min）全部归一化为 0.0，空序列返回空。
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = value_range(values) else {
        return Vec::new();
    };

    if max == min {
        return vec![0.0; values.len()];
    }

    let span = max - min;
    if span.is_finite() {
        return values.iter().map(|v| ((v - min) / span).clamp(0.0, 1.0)).collect();
    }

    // 跨度溢出为无穷大时按一半计算
    let half_span = max / 2.0 - min / 2.0;
    values
        .iter()
        .map(|v| ((v / 2.0 - min / 2.0) / half_span).clamp(0.0, 1.0))
        .collect()
}

/// 序列的 (min, max)
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// 拒绝 NaN 和无穷大，它们会污染 min/max
pub(crate) fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteValue { index }),
        None => Ok(()),
    }
}

/// 常量序列会走退化分支，记录一次
pub(crate) fn is_constant(values: &[f64]) -> bool {
    matches!(value_range(values), Some((min, max)) if min == max)
}
