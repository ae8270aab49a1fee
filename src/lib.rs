//! wgraph - 内存中的无向带权图
//!
//! 提供：
//! - 顶点数固定的邻接表图，支持加边、删边和深拷贝
//! - BFS、DFS、Dijkstra、Prim、Kruskal 五种经典算法
//! - 算法依赖的有界队列、有界优先队列和并查集

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod structures;
pub mod types;

// 重导出常用类型
pub use algorithm::{AlgorithmOptions, Algorithms, QueueBackend};
pub use error::{Error, Result};
pub use graph::{Adjacent, Edge, Graph};
pub use structures::{BoundedPriorityQueue, BoundedQueue, HeapPriorityQueue, MinPriorityQueue, UnionFind};
pub use types::{VertexId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
