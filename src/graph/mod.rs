//! 图核心模块
//!
//! 定义无向带权图和边的数据结构

mod edge;
mod graph;

pub use edge::{total_weight, Adjacent, Edge};
pub use graph::{Graph, Neighbors};
