// 属性映射测试
// 测试归一化、颜色、大小、标签、边权重格式化

use graft::mapping::{
    format_weights, map_colors, map_labels, map_sizes, normalize, palette, spring,
    AttributeKind, AttributeSequence, Entity, Rgba, SizeRange, WeightFormat,
};
use graft::values::Value;
use graft::Error;
use std::collections::HashSet;

// 辅助函数：颜色转为可哈希的键
fn color_key(c: &Rgba) -> String {
    c.to_hex()
}

#[test]
fn test_normalize_bounds() {
    let values = [3.0, -1.0, 7.0, 2.0];
    let norm = normalize(&values);

    assert_eq!(norm.len(), values.len());
    assert_eq!(norm[2], 1.0);
    assert_eq!(norm[1], 0.0);
    assert!(norm.iter().all(|x| (0.0..=1.0).contains(x)));
}

#[test]
fn test_constant_sequences_never_nan() {
    let values = [10.0, 10.0, 10.0];

    assert_eq!(normalize(&values), vec![0.0; 3]);
    let sizes = map_sizes(&values, SizeRange::default()).unwrap();
    assert_eq!(sizes, vec![10.0; 3]);

    let colors = map_colors(&AttributeSequence::continuous(values), 1.0).unwrap();
    assert!(colors.iter().all(|c| *c == spring(0.0, 1.0)));
}

#[test]
fn test_wide_range_stays_finite() {
    let values = [-1e308, 0.0, 1e308];

    let sizes = map_sizes(&values, SizeRange::default()).unwrap();
    assert_eq!(sizes, vec![10.0, 30.0, 50.0]);

    let colors = map_colors(&AttributeSequence::continuous(values), 1.0).unwrap();
    assert_eq!(colors[1], spring(0.5, 1.0));
    assert_eq!(colors[2], spring(1.0, 1.0));
    assert!(colors.iter().all(|c| c.g.is_finite() && c.b.is_finite()));
}

#[test]
fn test_categorical_colors_one_per_category() {
    for k in 1..=10i64 {
        let values: Vec<i64> = (0..k * 3).map(|i| i % k).collect();
        let seq = AttributeSequence::categorical(values.clone());
        let colors = map_colors(&seq, 1.0).unwrap();

        let distinct: HashSet<String> = colors.iter().map(color_key).collect();
        assert_eq!(distinct.len(), k as usize, "k = {}", k);

        // 同一类别的颜色一致
        for (i, v) in values.iter().enumerate() {
            assert_eq!(colors[i], colors[*v as usize]);
        }
    }
}

#[test]
fn test_categorical_palette_exhaustion() {
    let seq = AttributeSequence::categorical(0..11i64);
    assert!(matches!(
        map_colors(&seq, 1.0),
        Err(Error::PaletteExhausted { distinct: 11, max: 10 })
    ));
}

#[test]
fn test_single_category_uses_first_palette() {
    let seq = AttributeSequence::categorical(["only", "only"]);
    let colors = map_colors(&seq, 0.4).unwrap();

    let expected = Rgba::from_hex(palette(1).unwrap()[0], 0.4).unwrap();
    assert_eq!(colors, vec![expected, expected]);
}

#[test]
fn test_continuous_alpha_applied() {
    let seq = AttributeSequence::continuous(vec![0.0, 1.0]);
    let colors = map_colors(&seq, 0.3).unwrap();
    assert!(colors.iter().all(|c| c.a == 0.3));
}

#[test]
fn test_inference_from_values() {
    let ints: Vec<Value> = vec![Value::Int(1), Value::Int(2), Value::Int(1)];
    assert_eq!(AttributeSequence::infer(&ints).unwrap().kind(), AttributeKind::Categorical);

    let floats: Vec<Value> = vec![Value::Float(1.0), Value::Float(2.0)];
    assert_eq!(AttributeSequence::infer(&floats).unwrap().kind(), AttributeKind::Continuous);

    let many: Vec<Value> = (0..20).map(Value::Int).collect();
    assert_eq!(AttributeSequence::infer(&many).unwrap().kind(), AttributeKind::Continuous);
}

#[test]
fn test_nan_rejected() {
    assert!(matches!(
        map_sizes(&[1.0, f64::NAN], SizeRange::default()),
        Err(Error::NonFiniteValue { index: 1 })
    ));
    assert!(matches!(
        map_colors(&AttributeSequence::continuous(vec![f64::INFINITY]), 1.0),
        Err(Error::NonFiniteValue { index: 0 })
    ));
}

#[test]
fn test_format_weights_example() {
    let format: WeightFormat = ".2f".parse().unwrap();
    let (text, pen_width) = format_weights(&[1.0, 2.0, 4.0], &format, 5.0).unwrap();

    assert_eq!(text, vec!["1.00", "2.00", "4.00"]);
    assert_eq!(pen_width, vec![1.25, 2.5, 5.0]);
}

#[test]
fn test_format_weights_all_zero() {
    let (text, pen_width) = format_weights(&[0.0, 0.0, 0.0], &WeightFormat::default(), 5.0).unwrap();

    assert_eq!(text, vec!["0.00", "0.00", "0.00"]);
    assert_eq!(pen_width, vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_format_weights_negative_weights() {
    let (_, pen_width) = format_weights(&[-1.0, 2.0], &WeightFormat::default(), 1.0).unwrap();
    assert_eq!(pen_width, vec![-0.5, 1.0]);

    let (_, pen_width) = format_weights(&[-2.0, -1.0], &WeightFormat::default(), 1.0).unwrap();
    assert_eq!(pen_width, vec![2.0, 1.0]);
}

#[test]
fn test_format_weights_rejects_bad_scale() {
    assert!(matches!(
        format_weights(&[1.0], &WeightFormat::default(), f64::NAN),
        Err(Error::InvalidOption(_))
    ));
}

#[test]
fn test_label_shape_mismatch_before_assignment() {
    let names = vec!["a".to_string(), "b".to_string()];
    let result = map_labels(Some(names.as_slice()), Entity::Vertex, 3);
    assert!(matches!(
        result,
        Err(Error::ShapeMismatch { expected: 3, actual: 2, .. })
    ));
}
