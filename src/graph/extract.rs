// 从输入图中提取绘制所需的组件
//
// 无向图按无序对去重，保留第一次出现的边及其权重；没有边权重时每条边权重为 1.0。

use crate::error::{Error, Result};
use crate::graph::model::{GraphData, Link};
use crate::mapping::{ensure_len, Entity};
use std::collections::HashSet;

/// 提取结果：一次绘制过程使用的顶点数、边集和权重
#[derive(Debug, Clone, PartialEq)]
pub struct GraphComponents {
    pub num_nodes: usize,
    pub links: Vec<Link>,
    pub weights: Vec<f64>,
    pub directed: bool,
    /// 权重是否来自输入图（否则为统一的 1.0）
    pub weighted: bool,
}

impl GraphComponents {
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }
}

pub fn extract_components(graph: &GraphData) -> Result<GraphComponents> {
    let num_nodes = graph.num_nodes;

    for (index, &(from, to)) in graph.edge_index.iter().enumerate() {
        if from >= num_nodes || to >= num_nodes {
            return Err(Error::InvalidEdge {
                index,
                from,
                to,
                num_nodes,
            });
        }
    }

    if let Some(attr) = &graph.edge_attr {
        ensure_len(Entity::Edge, graph.edge_count(), attr.len())?;
        if let Some(index) = attr.iter().position(|w| !w.is_finite()) {
            return Err(Error::NonFiniteValue { index });
        }
    }

    let weight_at = |i: usize| graph.edge_attr.as_ref().map_or(1.0, |attr| attr[i]);
    let directed = !graph.is_undirected();

    let (links, weights): (Vec<Link>, Vec<f64>) = if directed {
        graph
            .edge_index
            .iter()
            .enumerate()
            .map(|(i, &link)| (link, weight_at(i)))
            .unzip()
    } else {
        let mut seen = HashSet::new();
        graph
            .edge_index
            .iter()
            .enumerate()
            .filter_map(|(i, &(s, t))| {
                let key = (s.min(t), s.max(t));
                seen.insert(key).then(|| (key, weight_at(i)))
            })
            .unzip()
    };

    let dropped = graph.edge_count() - links.len();
    if dropped > 0 {
        tracing::warn!(dropped, "dropped duplicate undirected edges");
    }
    tracing::debug!(
        num_nodes,
        edges = links.len(),
        directed,
        weighted = graph.has_edge_weights(),
        "extracted graph components"
    );

    Ok(GraphComponents {
        num_nodes,
        links,
        weights,
        directed,
        weighted: graph.has_edge_weights(),
    })
}
