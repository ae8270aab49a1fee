//! Dijkstra 单源最短路径
//!
//! 只支持非负边权；结果树中的边保留原始边权而不是累计距离

use super::{check_start, QueueBackend};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{VertexId, Weight};
use tracing::{debug, warn};

pub(super) fn dijkstra(graph: &Graph, start: VertexId, backend: QueueBackend) -> Result<Graph> {
    check_start(graph, start)?;
    reject_negative_weights(graph)?;

    let n = graph.num_vertices();
    let mut distance: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut queue = backend.create(n);

    let mut tree = Graph::new(n)?;
    tree.initialize_visit_order();

    distance[start] = Some(0);
    queue.insert(start, 0)?;

    let mut relaxations = 0usize;

    while !queue.is_empty() {
        // 已出队的顶点不会再次入队
        let u = queue.extract_min()?;
        finalized[u] = true;
        tree.push_visit(u)?;

        let dist_u = distance[u].ok_or_else(|| {
            Error::InvalidArgument(format!("出队顶点 {} 没有记录距离", u))
        })?;

        for adj in graph.adjacency(u)? {
            let v = adj.vertex;
            if finalized[v] {
                continue;
            }

            let candidate = dist_u.saturating_add(adj.weight);
            if distance[v].map_or(true, |dist_v| candidate < dist_v) {
                distance[v] = Some(candidate);
                parent[v] = Some(u);
                queue.push_or_decrease(v, candidate)?;
                relaxations += 1;
            }
        }
    }

    for (v, link) in parent.iter().enumerate() {
        if let Some(u) = *link {
            let weight = graph.weight(u, v).ok_or_else(|| {
                Error::InvalidArgument(format!("最短路径树引用了不存在的边 {} - {}", u, v))
            })?;
            tree.add_edge(u, v, weight)?;
        }
    }

    debug!(
        start,
        reached = tree.visit_count(),
        relaxations,
        "Dijkstra 最短路径树构建完成"
    );

    Ok(tree)
}

/// 图中任意一条负权边都会使算法失败，与是否可达无关
fn reject_negative_weights(graph: &Graph) -> Result<()> {
    if let Some(edge) = graph.edges().into_iter().find(|e| e.weight < 0) {
        warn!(from = edge.from, to = edge.to, weight = edge.weight, "检测到负权边");
        return Err(Error::InvalidArgument(format!(
            "检测到负权边 {}，Dijkstra 不支持负权",
            edge
        )));
    }
    Ok(())
}
