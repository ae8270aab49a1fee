//! 结果打印器
//!
//! 提供文本、表格和 JSON 三种输出

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::metrics::{AlgorithmKind, MetricsSnapshot};
use crate::types::{VertexId, Weight};
use prettytable::{format, row, Table};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `u: (v, w=weight) ...` 文本格式
    #[default]
    Text,
    /// 边表
    Table,
    /// JSON 报告
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidArgument(format!("未知的输出格式: {}", other))),
        }
    }
}

/// 一次算法运行的结果报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub algorithm: AlgorithmKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<VertexId>,
    pub num_vertices: usize,
    pub visit_order: Vec<VertexId>,
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
}

impl AlgorithmReport {
    pub fn from_tree(algorithm: AlgorithmKind, start: Option<VertexId>, tree: &Graph) -> Self {
        let edges = tree.edges();
        Self {
            algorithm,
            start,
            num_vertices: tree.num_vertices(),
            visit_order: tree.visit_order().to_vec(),
            total_weight: crate::graph::total_weight(&edges),
            edges,
        }
    }
}

/// 结果打印器
pub struct Printer {
    format: OutputFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 设置输出格式
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// 输出一张图
    pub fn render_graph(&self, graph: &Graph) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(graph.render_all()),
            OutputFormat::Table => Ok(self.format_edges(&graph.edges(), graph.visit_order())),
            OutputFormat::Json => to_json(&graph.edges()),
        }
    }

    /// 输出算法结果
    pub fn render_report(&self, report: &AlgorithmReport, tree: &Graph) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(tree.render()),
            OutputFormat::Table => {
                let mut out = self.format_edges(&report.edges, &report.visit_order);
                out.push_str(&format!(
                    "{} edge(s), total weight {}\n",
                    report.edges.len(),
                    report.total_weight
                ));
                Ok(out)
            }
            OutputFormat::Json => to_json(report),
        }
    }

    /// 边表
    fn format_edges(&self, edges: &[Edge], visit_order: &[VertexId]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["From", "To", "Weight"]);
        for edge in edges {
            table.add_row(row![edge.from, edge.to, edge.weight]);
        }

        let order: Vec<String> = visit_order.iter().map(|v| v.to_string()).collect();
        format!("{}Visit order: [{}]\n", table, order.join(", "))
    }

    /// 打印指标
    pub fn print_stats(&self, snapshot: &MetricsSnapshot) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(snapshot);
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Algorithm", "Runs", "Failures", "Avg (us)", "Tree Edges"]);
        for a in &snapshot.algorithms {
            table.add_row(row![
                a.algorithm,
                a.runs,
                a.failures,
                format!("{:.1}", a.avg_duration_us),
                a.tree_edges
            ]);
        }
        Ok(table.to_string())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::SerializationError(e.to_string()))
}
