// 颜色映射
//
// 连续属性：归一化后在 spring 色图（粉 -> 黄）上取色。
// 分类属性：不同取值升序排列，按名次从固定调色板取色。

use crate::error::{Error, Result};
use crate::mapping::attribute::{AttributeSequence, MAX_CATEGORIES};
use crate::mapping::normalize::{check_finite, is_constant, normalize};
use crate::values::Category;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// RGBA 颜色，各分量在 [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// 解析 `#RRGGBB`
    pub fn from_hex(hex: &str, alpha: f64) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .map(|c| c as f64 / 255.0)
        };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// 输出 `#RRGGBBAA`
    pub fn to_hex(&self) -> String {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }
}

impl From<[f64; 4]> for Rgba {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// spring 色图：x=0 为品红，x=1 为黄色
pub fn spring(x: f64, alpha: f64) -> Rgba {
    let x = x.clamp(0.0, 1.0);
    Rgba::new(1.0, x, 1.0 - x, alpha)
}

// ggplot 风格的调色板，第 k 项用于 k 个类别
static PALETTES: [&[&str]; MAX_CATEGORIES] = [
    &["#F8766D"],
    &["#F8766D", "#00BFC4"],
    &["#F8766D", "#00BA38", "#619CFF"],
    &["#F8766D", "#7CAE00", "#00BFC4", "#C77CFF"],
    &["#F8766D", "#A3A500", "#00BF7D", "#00B0F6", "#E76BF3"],
    &["#F8766D", "#B79F00", "#00BA38", "#00BFC4", "#619CFF", "#F564E3"],
    &["#F8766D", "#C49A00", "#53B400", "#00C094", "#00B6EB", "#A58AFF", "#FB61D7"],
    &["#F8766D", "#CD9600", "#7CAE00", "#00BE67", "#00BFC4", "#00A9FF", "#C77CFF", "#FF61CC"],
    &["#F8766D", "#D39200", "#93AA00", "#00BA38", "#00C19F", "#00B9E3", "#619CFF", "#DB72FB", "#FF61C3"],
    &["#F8766D", "#A3A500", "#39B600", "#00BF7D", "#00BFC4", "#00B0F6", "#9590FF", "#E76BF3", "#FF62BC", "#D89000"],
];

/// k 个类别使用的调色板（k 在 1..=10）
pub fn palette(k: usize) -> Option<&'static [&'static str]> {
    k.checked_sub(1).and_then(|i| PALETTES.get(i)).copied()
}

/// 每个元素映射为一个 RGBA 颜色，保持顺序
pub fn map_colors(values: &AttributeSequence, alpha: f64) -> Result<Vec<Rgba>> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(Error::InvalidOption(format!("alpha {} outside [0, 1]", alpha)));
    }

    match values {
        AttributeSequence::Continuous(v) => map_continuous(v, alpha),
        AttributeSequence::Categorical(v) => map_categorical(v, alpha),
    }
}

fn map_continuous(values: &[f64], alpha: f64) -> Result<Vec<Rgba>> {
    check_finite(values)?;
    if is_constant(values) {
        tracing::warn!(len = values.len(), "constant color attribute, all values map to the colormap start");
    }
    Ok(normalize(values).into_iter().map(|x| spring(x, alpha)).collect())
}

fn map_categorical(values: &[Category], alpha: f64) -> Result<Vec<Rgba>> {
    let distinct: BTreeSet<&Category> = values.iter().collect();
    if distinct.is_empty() {
        return Ok(Vec::new());
    }

    let colors = palette(distinct.len()).ok_or(Error::PaletteExhausted {
        distinct: distinct.len(),
        max: MAX_CATEGORIES,
    })?;

    let lookup = distinct
        .into_iter()
        .zip(colors)
        .map(|(category, hex)| {
            Rgba::from_hex(hex, alpha)
                .map(|rgba| (category, rgba))
                .ok_or_else(|| Error::InvalidOption(format!("bad palette color {}", hex)))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(values.iter().map(|c| lookup[c]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_endpoints() {
        assert_eq!(spring(0.0, 1.0), Rgba::new(1.0, 0.0, 1.0, 1.0));
        assert_eq!(spring(1.0, 0.5), Rgba::new(1.0, 1.0, 0.0, 0.5));
    }

    #[test]
    fn test_hex_roundtrip() {
        let c = Rgba::from_hex("#F8766D", 1.0).unwrap();
        assert_eq!(c.to_hex(), "#F8766DFF");
        assert!(Rgba::from_hex("F8766D", 1.0).is_none());
        assert!(Rgba::from_hex("#F876", 1.0).is_none());
    }

    #[test]
    fn test_palette_sizes() {
        for k in 1..=MAX_CATEGORIES {
            assert_eq!(palette(k).unwrap().len(), k);
        }
        assert!(palette(0).is_none());
        assert!(palette(11).is_none());
    }

    #[test]
    fn test_categorical_rank_order() {
        let seq = AttributeSequence::categorical([5i64, 1, 5, 3]);
        let colors = map_colors(&seq, 1.0).unwrap();

        let expected = palette(3).unwrap();
        assert_eq!(colors[1], Rgba::from_hex(expected[0], 1.0).unwrap());
        assert_eq!(colors[3], Rgba::from_hex(expected[1], 1.0).unwrap());
        assert_eq!(colors[0], Rgba::from_hex(expected[2], 1.0).unwrap());
        assert_eq!(colors[0], colors[2]);
    }

    #[test]
    fn test_rejects_bad_alpha() {
        let seq = AttributeSequence::continuous(vec![1.0, 2.0]);
        assert!(matches!(map_colors(&seq, 1.5), Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_serializes_as_tuple() {
        let json = serde_json::to_string(&Rgba::new(1.0, 0.5, 0.0, 1.0)).unwrap();
        assert_eq!(json, "[1.0,0.5,0.0,1.0]");
    }
}
