//! 图遍历算法
//!
//! BFS 生成广度优先树，DFS 生成覆盖所有顶点的深度优先森林

use super::check_start;
use crate::error::Result;
use crate::graph::Graph;
use crate::structures::BoundedQueue;
use crate::types::{VertexId, Weight};
use tracing::debug;

/// 顶点访问状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// 未发现
    White,
    /// 已发现，尚未处理完
    Gray,
    /// 处理完成
    Black,
}

/// 广度优先搜索
///
/// 每个可达的非起点顶点通过原始边权连到它的 BFS 父节点；
/// 访问顺序即出队顺序。
pub(super) fn bfs(graph: &Graph, start: VertexId) -> Result<Graph> {
    check_start(graph, start)?;
    let n = graph.num_vertices();

    let mut tree = Graph::new(n)?;
    tree.initialize_visit_order();

    let mut queue = BoundedQueue::new(n);
    let mut color = vec![Color::White; n];
    let mut distance: Vec<Option<usize>> = vec![None; n];
    let mut parent: Vec<Option<(VertexId, Weight)>> = vec![None; n];

    color[start] = Color::Gray;
    distance[start] = Some(0);
    queue.enqueue(start)?;

    while !queue.is_empty() {
        let u = queue.dequeue()?;
        tree.push_visit(u)?;

        for adj in graph.adjacency(u)? {
            let v = adj.vertex;
            if color[v] == Color::White {
                color[v] = Color::Gray;
                distance[v] = distance[u].map(|d| d + 1);
                parent[v] = Some((u, adj.weight));
                queue.enqueue(v)?;
            }
        }
        color[u] = Color::Black;
    }

    for (v, link) in parent.iter().enumerate() {
        if let Some((u, weight)) = *link {
            tree.add_edge(u, v, weight)?;
        }
    }

    debug!(
        start,
        reached = tree.visit_count(),
        depth = distance.iter().flatten().copied().max().unwrap_or(0),
        "BFS 树构建完成"
    );

    Ok(tree)
}

/// 深度优先搜索
///
/// 先从 `start` 出发，再依次从编号最小的未访问顶点出发，得到森林。
/// 树边在发现新顶点时加入；访问顺序即发现顺序。
pub(super) fn dfs(graph: &Graph, start: VertexId) -> Result<Graph> {
    check_start(graph, start)?;
    let n = graph.num_vertices();

    let mut tree = Graph::new(n)?;
    tree.initialize_visit_order();

    let mut color = vec![Color::White; n];
    let mut roots = 0usize;

    for root in std::iter::once(start).chain(0..n) {
        if color[root] == Color::White {
            dfs_visit(graph, &mut tree, root, &mut color)?;
            roots += 1;
        }
    }

    debug!(start, trees = roots, "DFS 森林构建完成");

    Ok(tree)
}

/// 从 `root` 出发的一棵 DFS 树
///
/// 显式栈保存每层的邻接表迭代器，发现顺序与递归写法一致。
fn dfs_visit(graph: &Graph, tree: &mut Graph, root: VertexId, color: &mut [Color]) -> Result<()> {
    color[root] = Color::Gray;
    tree.push_visit(root)?;

    let mut stack = vec![(root, graph.adjacency(root)?)];

    while let Some((u, neighbors)) = stack.last_mut() {
        match neighbors.next() {
            Some(adj) => {
                let v = adj.vertex;
                if color[v] == Color::White {
                    let u = *u;
                    color[v] = Color::Gray;
                    tree.add_edge(u, v, adj.weight)?;
                    tree.push_visit(v)?;
                    stack.push((v, graph.adjacency(v)?));
                }
            }
            None => {
                color[*u] = Color::Black;
                stack.pop();
            }
        }
    }

    Ok(())
}
