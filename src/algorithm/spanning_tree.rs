//! 最小生成树
//!
//! Prim 从顶点 0 生长出一棵树；Kruskal 按边权从小到大合并分量，
//! 在非连通图上得到最小生成森林。

use super::QueueBackend;
use crate::error::Result;
use crate::graph::Graph;
use crate::structures::UnionFind;
use crate::types::{VertexId, Weight};
use tracing::debug;

/// Prim 算法
///
/// 与顶点 0 不连通的顶点不会出现在结果中。
pub(super) fn prim(graph: &Graph, backend: QueueBackend) -> Result<Graph> {
    let n = graph.num_vertices();
    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut queue = backend.create(n);

    let mut tree = Graph::new(n)?;
    tree.initialize_visit_order();

    key[0] = Some(0);
    queue.insert(0, 0)?;

    while !queue.is_empty() {
        let u = queue.extract_min()?;
        in_tree[u] = true;
        tree.push_visit(u)?;

        for adj in graph.adjacency(u)? {
            let v = adj.vertex;
            if in_tree[v] {
                continue;
            }
            if key[v].map_or(true, |k| adj.weight < k) {
                key[v] = Some(adj.weight);
                parent[v] = Some(u);
                queue.push_or_decrease(v, adj.weight)?;
            }
        }
    }

    for v in 1..n {
        if let (Some(u), Some(weight)) = (parent[v], key[v]) {
            tree.add_edge(u, v, weight)?;
        }
    }

    debug!(
        reached = tree.visit_count(),
        weight = tree.total_weight(),
        "Prim 最小生成树构建完成"
    );

    Ok(tree)
}

/// Kruskal 算法
///
/// 每条无向边只入队一次；已选 `n - 1` 条边或候选边耗尽时停止。
pub(super) fn kruskal(graph: &Graph, backend: QueueBackend) -> Result<Graph> {
    let n = graph.num_vertices();
    let edges = graph.edges();

    let mut queue = backend.create(edges.len());
    for (id, edge) in edges.iter().enumerate() {
        queue.insert(id, edge.weight)?;
    }

    let mut tree = Graph::new(n)?;
    tree.initialize_visit_order();

    let mut components = UnionFind::new(n);
    let mut touched = vec![false; n];
    let mut accepted = 0usize;

    while !queue.is_empty() && accepted + 1 < n {
        let edge = edges[queue.extract_min()?];
        if components.connected(edge.from, edge.to)? {
            continue;
        }

        tree.add_edge(edge.from, edge.to, edge.weight)?;
        components.unite(edge.from, edge.to)?;

        for v in [edge.from, edge.to] {
            if !touched[v] {
                touched[v] = true;
                tree.push_visit(v)?;
            }
        }
        accepted += 1;
    }

    debug!(
        candidates = edges.len(),
        accepted,
        components = components.set_count(),
        weight = tree.total_weight(),
        "Kruskal 最小生成森林构建完成"
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const BACKENDS: [QueueBackend; 2] = [QueueBackend::LinearScan, QueueBackend::Heap];

    /// 随机连通图：先连一条随机生成树，再补充随机边
    fn random_connected_graph(rng: &mut StdRng, n: usize, extra: usize) -> Graph {
        let mut graph = Graph::new(n).unwrap();
        for v in 1..n {
            let u = rng.gen_range(0..v);
            graph.add_edge(u, v, rng.gen_range(0..50)).unwrap();
        }
        for _ in 0..extra {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v && !graph.has_edge(u, v) {
                graph.add_edge(u, v, rng.gen_range(-10..50)).unwrap();
            }
        }
        graph
    }

    fn is_acyclic(tree: &Graph) -> bool {
        let mut uf = UnionFind::new(tree.num_vertices());
        tree.edges()
            .iter()
            .all(|e| !uf.connected(e.from, e.to).unwrap() && uf.unite(e.from, e.to).is_ok())
    }

    #[test]
    fn test_sample_mst_weight() {
        let graph = sample_graph();
        for backend in BACKENDS {
            let by_prim = prim(&graph, backend).unwrap();
            let by_kruskal = kruskal(&graph, backend).unwrap();

            assert_eq!(by_prim.total_weight(), 7);
            assert_eq!(by_kruskal.total_weight(), 7);
            assert_eq!(by_prim.edge_count(), 4);
            assert_eq!(by_kruskal.edge_count(), 4);
            assert_well_formed(&by_prim);
            assert_well_formed(&by_kruskal);
        }
    }

    #[test]
    fn test_kruskal_visit_order() {
        let graph = sample_graph();
        let mst = kruskal(&graph, QueueBackend::LinearScan).unwrap();

        // 按边权接受: 0-1(1), 2-3(1), 1-2(2), 3-4(3)
        assert_eq!(mst.visit_order(), &[0, 1, 2, 3, 4]);
        assert!(mst.has_edge(3, 4));
        assert!(!mst.has_edge(0, 4));
    }

    #[test]
    fn test_prim_visit_order() {
        let graph = sample_graph();
        let mst = prim(&graph, QueueBackend::LinearScan).unwrap();
        assert_eq!(mst.visit_order(), &[0, 1, 2, 3, 4]);
        assert_eq!(mst.weight(3, 4), Some(3));
    }

    #[test]
    fn test_prim_skips_unreachable() {
        let graph = Graph::from_edges(5, vec![(0, 1, 3), (1, 2, 1), (3, 4, 2)]).unwrap();
        let mst = prim(&graph, QueueBackend::LinearScan).unwrap();

        assert_eq!(mst.visit_order(), &[0, 1, 2]);
        assert_eq!(mst.edge_count(), 2);
        assert!(!mst.has_edge(3, 4));
    }

    #[test]
    fn test_kruskal_spanning_forest() {
        let graph =
            Graph::from_edges(6, vec![(0, 1, 3), (1, 2, 1), (0, 2, 2), (3, 4, 2), (4, 5, 7), (3, 5, 4)])
                .unwrap();
        let forest = kruskal(&graph, QueueBackend::LinearScan).unwrap();

        assert_eq!(forest.edge_count(), 4);
        assert_eq!(forest.total_weight(), 1 + 2 + 2 + 4);
        assert!(is_acyclic(&forest));
    }

    #[test]
    fn test_negative_weights_allowed() {
        let graph = Graph::from_edges(3, vec![(0, 1, -2), (1, 2, 5), (0, 2, -1)]).unwrap();
        for backend in BACKENDS {
            assert_eq!(prim(&graph, backend).unwrap().total_weight(), -3);
            assert_eq!(kruskal(&graph, backend).unwrap().total_weight(), -3);
        }
    }

    #[test]
    fn test_random_graphs_agree() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for round in 0..40 {
            let n = rng.gen_range(1..25);
            let graph = random_connected_graph(&mut rng, n, n * 2);

            for backend in BACKENDS {
                let by_prim = prim(&graph, backend).unwrap();
                let by_kruskal = kruskal(&graph, backend).unwrap();

                assert_eq!(
                    by_prim.total_weight(),
                    by_kruskal.total_weight(),
                    "第 {} 轮 ({} 个顶点) 总权重不一致",
                    round,
                    n
                );
                assert_eq!(by_kruskal.edge_count(), n - 1);
                assert_eq!(by_prim.edge_count(), n - 1);
                assert!(is_acyclic(&by_kruskal));
                assert!(is_acyclic(&by_prim));
            }
        }
    }
}
