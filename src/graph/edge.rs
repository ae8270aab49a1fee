//! 边定义
//!
//! 无向带权边以及邻接表中的单个条目

use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无向边（列举时保证 `from < to`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.from {
            Some(self.to)
        } else if vertex == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (w={})", self.from, self.to, self.weight)
    }
}

/// 邻接表条目：邻居顶点和边权
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjacent {
    pub vertex: VertexId,
    pub weight: Weight,
}

impl fmt::Display for Adjacent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, w={})", self.vertex, self.weight)
    }
}

/// 一组边的总权重
pub fn total_weight<'a, I>(edges: I) -> Weight
where
    I: IntoIterator<Item = &'a Edge>,
{
    edges.into_iter().map(|e| e.weight).sum()
}
