use crate::values::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type NodeId = usize;
pub type Link = (NodeId, NodeId);

/// 输入图
///
/// 只读：一次绘制过程中不会修改。字段与常见的图学习数据容器一致：
/// `edge_index` 为 (起点, 终点) 对，`edge_attr` 为每条边的权重，
/// `x` 为节点特征，`y` 为节点标签。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    /// 节点数量
    pub num_nodes: usize,
    /// 边列表
    #[serde(default)]
    pub edge_index: Vec<Link>,
    /// 边权重（可选，每条边一个）
    #[serde(default)]
    pub edge_attr: Option<Vec<f64>>,
    /// 节点特征矩阵（可选，映射过程不使用）
    #[serde(default)]
    pub x: Option<Vec<Vec<f64>>>,
    /// 节点标签（可选，映射过程不使用）
    #[serde(default)]
    pub y: Option<Vec<Value>>,
    /// 显式指定是否无向；为 None 时根据边列表推断
    #[serde(default)]
    pub undirected: Option<bool>,
}

impl GraphData {
    pub fn new(num_nodes: usize, edge_index: Vec<Link>) -> Self {
        Self {
            num_nodes,
            edge_index,
            ..Default::default()
        }
    }

    /// 设置边权重
    pub fn with_edge_attr(mut self, weights: Vec<f64>) -> Self {
        self.edge_attr = Some(weights);
        self
    }

    /// 设置节点特征
    pub fn with_features(mut self, x: Vec<Vec<f64>>) -> Self {
        self.x = Some(x);
        self
    }

    /// 设置节点标签
    pub fn with_labels(mut self, y: Vec<Value>) -> Self {
        self.y = Some(y);
        self
    }

    /// 显式指定有向/无向，覆盖推断结果
    pub fn with_undirected(mut self, undirected: bool) -> Self {
        self.undirected = Some(undirected);
        self
    }

    /// 边数量（去重前）
    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    pub fn has_edge_weights(&self) -> bool {
        self.edge_attr.is_some()
    }

    /// 是否无向
    ///
    /// 未显式指定时，每条边都存在反向边即视为无向（空边集也是无向）。
    pub fn is_undirected(&self) -> bool {
        if let Some(undirected) = self.undirected {
            return undirected;
        }
        let links: HashSet<Link> = self.edge_index.iter().copied().collect();
        links.iter().all(|&(s, t)| links.contains(&(t, s)))
    }
}
