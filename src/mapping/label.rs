use crate::error::Result;
use crate::mapping::{ensure_len, Entity};

/// 按位置为每个实体分配显示文本
///
/// 没有名字时返回 None（不显示标签）。长度在分配前检查。
pub fn map_labels<S: AsRef<str>>(
    names: Option<&[S]>,
    entity: Entity,
    count: usize,
) -> Result<Option<Vec<String>>> {
    let Some(names) = names else {
        return Ok(None);
    };

    ensure_len(entity, count, names.len())?;
    Ok(Some(names.iter().map(|n| n.as_ref().to_string()).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_labels_absent() {
        assert_eq!(map_labels::<String>(None, Entity::Vertex, 3).unwrap(), None);
    }

    #[test]
    fn test_labels_positional() {
        let labels = map_labels(Some(&["a", "b"][..]), Entity::Vertex, 2).unwrap();
        assert_eq!(labels, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_labels_shape_mismatch() {
        let err = map_labels(Some(&["a", "b"][..]), Entity::Vertex, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch { entity: Entity::Vertex, expected: 3, actual: 2 }
        ));
    }
}
