//! 性能指标收集模块
//!
//! 统计每种图算法的运行次数、失败次数、耗时和产出的树边数

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 算法种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Kruskal,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::Prim,
        AlgorithmKind::Kruskal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::Dfs => "dfs",
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::Prim => "prim",
            AlgorithmKind::Kruskal => "kruskal",
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 单个算法的统计
#[derive(Debug, Default)]
struct AlgorithmStats {
    /// 运行次数
    runs: AtomicU64,
    /// 失败次数
    failures: AtomicU64,
    /// 总耗时（微秒）
    total_duration_us: AtomicU64,
    /// 产出的树边总数
    tree_edges: AtomicU64,
}

/// 系统全局指标
#[derive(Debug)]
pub struct Metrics {
    algorithms: [AlgorithmStats; 5],
    /// 启动时间
    start_time: Instant,
}

/// 可导出的单个算法指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSnapshot {
    pub algorithm: AlgorithmKind,
    pub runs: u64,
    pub failures: u64,
    pub avg_duration_us: f64,
    pub tree_edges: u64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub algorithms: Vec<AlgorithmSnapshot>,
    pub total_runs: u64,
    pub total_failures: u64,
    pub uptime_seconds: u64,
}

impl MetricsSnapshot {
    pub fn get(&self, kind: AlgorithmKind) -> Option<&AlgorithmSnapshot> {
        self.algorithms.iter().find(|s| s.algorithm == kind)
    }
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            algorithms: Default::default(),
            start_time: Instant::now(),
        }
    }

    /// 记录算法开始
    pub fn record_run_start(&self, kind: AlgorithmKind) -> RunTimer {
        self.stats(kind).runs.fetch_add(1, Ordering::Relaxed);
        RunTimer::new(kind)
    }

    /// 记录算法结束；成功时传入产出的树边数
    pub fn record_run_complete(&self, timer: RunTimer, tree_edges: Option<usize>) {
        let stats = self.stats(timer.kind);
        stats
            .total_duration_us
            .fetch_add(timer.elapsed().as_micros() as u64, Ordering::Relaxed);

        match tree_edges {
            Some(count) => {
                stats.tree_edges.fetch_add(count as u64, Ordering::Relaxed);
            }
            None => {
                stats.failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        let algorithms: Vec<AlgorithmSnapshot> = AlgorithmKind::ALL
            .iter()
            .map(|&kind| {
                let stats = self.stats(kind);
                let runs = stats.runs.load(Ordering::Relaxed);
                let total_us = stats.total_duration_us.load(Ordering::Relaxed);
                AlgorithmSnapshot {
                    algorithm: kind,
                    runs,
                    failures: stats.failures.load(Ordering::Relaxed),
                    avg_duration_us: if runs > 0 {
                        total_us as f64 / runs as f64
                    } else {
                        0.0
                    },
                    tree_edges: stats.tree_edges.load(Ordering::Relaxed),
                }
            })
            .collect();

        MetricsSnapshot {
            total_runs: algorithms.iter().map(|a| a.runs).sum(),
            total_failures: algorithms.iter().map(|a| a.failures).sum(),
            algorithms,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 导出为 Prometheus 格式
    pub fn to_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        let mut content = String::new();

        content.push_str("# HELP wgraph_algorithm_runs_total Number of algorithm runs\n");
        content.push_str("# TYPE wgraph_algorithm_runs_total counter\n");
        for a in &snapshot.algorithms {
            content.push_str(&format!(
                "wgraph_algorithm_runs_total{{algorithm=\"{}\"}} {}\n",
                a.algorithm, a.runs
            ));
        }

        content.push_str("# HELP wgraph_algorithm_failures_total Number of failed algorithm runs\n");
        content.push_str("# TYPE wgraph_algorithm_failures_total counter\n");
        for a in &snapshot.algorithms {
            content.push_str(&format!(
                "wgraph_algorithm_failures_total{{algorithm=\"{}\"}} {}\n",
                a.algorithm, a.failures
            ));
        }

        content.push_str("# HELP wgraph_algorithm_duration_avg_us Average run duration in microseconds\n");
        content.push_str("# TYPE wgraph_algorithm_duration_avg_us gauge\n");
        for a in &snapshot.algorithms {
            content.push_str(&format!(
                "wgraph_algorithm_duration_avg_us{{algorithm=\"{}\"}} {:.2}\n",
                a.algorithm, a.avg_duration_us
            ));
        }

        content.push_str("# HELP wgraph_tree_edges_total Tree edges produced by algorithms\n");
        content.push_str("# TYPE wgraph_tree_edges_total counter\n");
        for a in &snapshot.algorithms {
            content.push_str(&format!(
                "wgraph_tree_edges_total{{algorithm=\"{}\"}} {}\n",
                a.algorithm, a.tree_edges
            ));
        }

        content.push_str("# HELP wgraph_uptime_seconds Process uptime in seconds\n");
        content.push_str("# TYPE wgraph_uptime_seconds counter\n");
        content.push_str(&format!("wgraph_uptime_seconds {}\n", snapshot.uptime_seconds));

        content
    }

    /// 重置所有指标
    pub fn reset(&self) {
        for stats in &self.algorithms {
            stats.runs.store(0, Ordering::Relaxed);
            stats.failures.store(0, Ordering::Relaxed);
            stats.total_duration_us.store(0, Ordering::Relaxed);
            stats.tree_edges.store(0, Ordering::Relaxed);
        }
    }

    fn stats(&self, kind: AlgorithmKind) -> &AlgorithmStats {
        &self.algorithms[kind.slot()]
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 算法计时器
pub struct RunTimer {
    kind: AlgorithmKind,
    start: Instant,
}

impl RunTimer {
    fn new(kind: AlgorithmKind) -> Self {
        Self {
            kind,
            start: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}
