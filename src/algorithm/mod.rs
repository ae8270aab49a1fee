//! 图算法模块
//!
//! 包含 BFS、DFS、Dijkstra 最短路径以及 Prim、Kruskal 最小生成树。
//! 每个算法读取输入图，返回一张新图表示找到的树或森林。

mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::metrics::{global_metrics, AlgorithmKind};
use crate::structures::{BoundedPriorityQueue, HeapPriorityQueue, MinPriorityQueue};
use crate::types::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// 优先队列实现
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueBackend {
    /// 线性扫描，平局按扫描顺序决定
    #[default]
    LinearScan,
    /// 带索引的二叉堆，平局顺序不做保证
    Heap,
}

impl QueueBackend {
    /// 创建指定容量的空优先队列
    pub fn create(&self, capacity: usize) -> Box<dyn MinPriorityQueue> {
        match self {
            QueueBackend::LinearScan => Box::new(BoundedPriorityQueue::new(capacity)),
            QueueBackend::Heap => Box::new(HeapPriorityQueue::new(capacity)),
        }
    }
}

impl fmt::Display for QueueBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueBackend::LinearScan => f.write_str("linear"),
            QueueBackend::Heap => f.write_str("heap"),
        }
    }
}

impl FromStr for QueueBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "linear_scan" | "scan" => Ok(QueueBackend::LinearScan),
            "heap" | "binary_heap" => Ok(QueueBackend::Heap),
            other => Err(Error::InvalidArgument(format!(
                "未知的优先队列实现: {}",
                other
            ))),
        }
    }
}

/// 算法配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmOptions {
    /// Dijkstra、Prim、Kruskal 使用的优先队列
    pub queue_backend: QueueBackend,
    /// 是否写入全局指标
    pub record_metrics: bool,
}

impl Default for AlgorithmOptions {
    fn default() -> Self {
        Self {
            queue_backend: QueueBackend::LinearScan,
            record_metrics: true,
        }
    }
}

/// 图算法入口
///
/// 无内部状态，每次调用独立分配自己的辅助结构。
#[derive(Debug, Clone, Copy, Default)]
pub struct Algorithms {
    options: AlgorithmOptions,
}

impl Algorithms {
    /// 使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AlgorithmOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AlgorithmOptions {
        &self.options
    }

    /// 广度优先搜索，返回 BFS 树
    pub fn bfs(&self, graph: &Graph, start: VertexId) -> Result<Graph> {
        self.instrumented(AlgorithmKind::Bfs, || traversal::bfs(graph, start))
    }

    /// 深度优先搜索，返回 DFS 森林
    pub fn dfs(&self, graph: &Graph, start: VertexId) -> Result<Graph> {
        self.instrumented(AlgorithmKind::Dfs, || traversal::dfs(graph, start))
    }

    /// Dijkstra 单源最短路径，返回最短路径树
    pub fn dijkstra(&self, graph: &Graph, start: VertexId) -> Result<Graph> {
        let backend = self.options.queue_backend;
        self.instrumented(AlgorithmKind::Dijkstra, || {
            shortest_path::dijkstra(graph, start, backend)
        })
    }

    /// Prim 最小生成树（以顶点 0 为根）
    pub fn prim(&self, graph: &Graph) -> Result<Graph> {
        let backend = self.options.queue_backend;
        self.instrumented(AlgorithmKind::Prim, || spanning_tree::prim(graph, backend))
    }

    /// Kruskal 最小生成森林
    pub fn kruskal(&self, graph: &Graph) -> Result<Graph> {
        let backend = self.options.queue_backend;
        self.instrumented(AlgorithmKind::Kruskal, || spanning_tree::kruskal(graph, backend))
    }

    /// 按名称运行算法；`start` 只对 bfs/dfs/dijkstra 有意义
    pub fn run(&self, kind: AlgorithmKind, graph: &Graph, start: VertexId) -> Result<Graph> {
        match kind {
            AlgorithmKind::Bfs => self.bfs(graph, start),
            AlgorithmKind::Dfs => self.dfs(graph, start),
            AlgorithmKind::Dijkstra => self.dijkstra(graph, start),
            AlgorithmKind::Prim => self.prim(graph),
            AlgorithmKind::Kruskal => self.kruskal(graph),
        }
    }

    fn instrumented<F>(&self, kind: AlgorithmKind, run: F) -> Result<Graph>
    where
        F: FnOnce() -> Result<Graph>,
    {
        let metrics = global_metrics();
        let timer = self
            .options
            .record_metrics
            .then(|| metrics.record_run_start(kind));

        let result = run();

        if let Some(timer) = timer {
            metrics.record_run_complete(timer, result.as_ref().ok().map(Graph::edge_count));
        }

        match &result {
            Ok(tree) => info!(
                algorithm = %kind,
                backend = %self.options.queue_backend,
                tree_edges = tree.edge_count(),
                visited = tree.visit_count(),
                "算法完成"
            ),
            Err(e) => warn!(algorithm = %kind, error = %e, "算法失败"),
        }

        result
    }
}

/// BFS（默认配置）
pub fn bfs(graph: &Graph, start: VertexId) -> Result<Graph> {
    Algorithms::new().bfs(graph, start)
}

/// DFS（默认配置）
pub fn dfs(graph: &Graph, start: VertexId) -> Result<Graph> {
    Algorithms::new().dfs(graph, start)
}

/// Dijkstra（默认配置）
pub fn dijkstra(graph: &Graph, start: VertexId) -> Result<Graph> {
    Algorithms::new().dijkstra(graph, start)
}

/// Prim（默认配置）
pub fn prim(graph: &Graph) -> Result<Graph> {
    Algorithms::new().prim(graph)
}

/// Kruskal（默认配置）
pub fn kruskal(graph: &Graph) -> Result<Graph> {
    Algorithms::new().kruskal(graph)
}

fn check_start(graph: &Graph, start: VertexId) -> Result<()> {
    if start >= graph.num_vertices() {
        return Err(Error::OutOfRange(format!(
            "起始顶点 {} 超出范围 [0, {})",
            start,
            graph.num_vertices()
        )));
    }
    Ok(())
}
