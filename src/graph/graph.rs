//! 图数据结构
//!
//! 顶点数固定的无向带权图，邻接表存储

use super::edge::{Adjacent, Edge};
use crate::error::{Error, Result};
use crate::types::{VertexId, Weight, DEFAULT_WEIGHT};
use indexmap::map::Iter as IndexMapIter;
use indexmap::IndexMap;
use std::fmt::Write as _;
use std::iter::Rev;

/// 无向带权图
///
/// 每条边在两个端点的邻接表中各存一份。邻接表按插入顺序保存，
/// 遍历时最新插入的边在前。`Clone` 是完整的深拷贝。
///
/// 相等比较区分邻接顺序：邻接顺序决定算法的平局选择。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点数
    num_vertices: usize,
    /// 邻接表：顶点 -> (邻居 -> 边权)
    adjacency: Vec<IndexMap<VertexId, Weight>>,
    /// 遍历算法记录的访问顺序（容量为顶点数）
    visit_order: Vec<VertexId>,
}

impl Graph {
    /// 创建 `num_vertices` 个顶点、没有边的图
    pub fn new(num_vertices: usize) -> Result<Self> {
        if num_vertices == 0 {
            return Err(Error::InvalidArgument("顶点数必须为正".to_string()));
        }

        Ok(Self {
            num_vertices,
            adjacency: vec![IndexMap::new(); num_vertices],
            visit_order: Vec::with_capacity(num_vertices),
        })
    }

    /// 由边列表构建图
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let mut graph = Self::new(num_vertices)?;
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        self.check_endpoints(from, to)?;
        if from == to {
            return Err(Error::InvalidArgument(format!("不允许自环: {}", from)));
        }
        if self.adjacency[from].contains_key(&to) || self.adjacency[to].contains_key(&from) {
            return Err(Error::InvalidArgument(format!(
                "边 {} - {} 已存在",
                from, to
            )));
        }

        self.adjacency[from].insert(to, weight);
        self.adjacency[to].insert(from, weight);
        Ok(())
    }

    /// 添加默认权重的无向边
    pub fn add_unit_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// 删除无向边
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.check_endpoints(from, to)?;
        if from == to {
            return Err(Error::InvalidArgument(format!("不允许删除自环: {}", from)));
        }
        if !self.adjacency[from].contains_key(&to) || !self.adjacency[to].contains_key(&from) {
            return Err(Error::InvalidArgument(format!(
                "边 {} - {} 不存在",
                from, to
            )));
        }

        // 保持剩余条目的相对顺序
        self.adjacency[from].shift_remove(&to);
        self.adjacency[to].shift_remove(&from);
        Ok(())
    }

    /// 两点之间是否有边
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |list| list.contains_key(&to))
    }

    /// 两点之间的边权
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.adjacency.get(from)?.get(&to).copied()
    }

    /// 列出所有边，每条无向边一次（`from < to`），按顶点序和邻接顺序
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, list)| {
                list.iter()
                    .rev()
                    .filter(move |(v, _)| u < **v)
                    .map(move |(&v, &w)| Edge::new(u, v, w))
            })
            .collect()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(IndexMap::len).sum::<usize>() / 2
    }

    /// 所有边的权重之和
    pub fn total_weight(&self) -> Weight {
        self.edges().iter().map(|e| e.weight).sum()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻接表（只读，最新插入的边在前）
    pub fn adjacency(&self, vertex: VertexId) -> Result<Neighbors<'_>> {
        self.check_vertex(vertex)?;
        Ok(Neighbors {
            inner: self.adjacency[vertex].iter().rev(),
        })
    }

    /// 获取顶点的度
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// 获取顶点数量
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    // ==================== 访问顺序 ====================

    /// 清空访问顺序，遍历算法写入前必须调用
    pub fn initialize_visit_order(&mut self) {
        self.visit_order.clear();
    }

    /// 追加一个已访问顶点；`index` 必须等于当前访问计数
    pub fn set_visit_order(&mut self, index: usize, vertex: VertexId) -> Result<()> {
        self.check_vertex(vertex)?;
        if self.visit_order.len() == self.num_vertices {
            return Err(Error::Overflow(format!(
                "访问顺序已满 (容量 {})",
                self.num_vertices
            )));
        }
        if index != self.visit_order.len() {
            return Err(Error::InvalidArgument(format!(
                "访问下标 {} 与当前计数 {} 不一致",
                index,
                self.visit_order.len()
            )));
        }
        self.visit_order.push(vertex);
        Ok(())
    }

    /// 记录下一个访问的顶点
    pub(crate) fn push_visit(&mut self, vertex: VertexId) -> Result<()> {
        self.set_visit_order(self.visit_order.len(), vertex)
    }

    pub fn visit_count(&self) -> usize {
        self.visit_order.len()
    }

    pub fn visit_order_at(&self, index: usize) -> Result<VertexId> {
        self.visit_order.get(index).copied().ok_or_else(|| {
            Error::OutOfRange(format!(
                "访问下标 {} 超出访问计数 {}",
                index,
                self.visit_order.len()
            ))
        })
    }

    pub fn visit_order(&self) -> &[VertexId] {
        &self.visit_order
    }

    // ==================== 输出 ====================

    /// 按访问顺序输出每个已访问顶点的邻接表，格式 `u: (v, w=weight) ...`
    ///
    /// 访问计数为 0 时输出为空。
    pub fn render(&self) -> String {
        self.render_vertices(self.visit_order.iter().copied())
    }

    /// 按顶点编号输出全部顶点的邻接表，与访问顺序无关
    pub fn render_all(&self) -> String {
        self.render_vertices(0..self.num_vertices)
    }

    /// 按访问顺序打印到标准输出
    pub fn print_graph(&self) {
        print!("{}", self.render());
    }

    /// 打印全部顶点到标准输出
    pub fn print_all(&self) {
        print!("{}", self.render_all());
    }

    fn render_vertices<I>(&self, vertices: I) -> String
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut out = String::new();
        for u in vertices {
            let _ = write!(out, "{}: ", u);
            for (&v, &w) in self.adjacency[u].iter().rev() {
                let _ = write!(out, "({}, w={}) ", v, w);
            }
            out.push('\n');
        }
        out
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.num_vertices {
            return Err(Error::OutOfRange(format!(
                "顶点 {} 超出范围 [0, {})",
                vertex, self.num_vertices
            )));
        }
        Ok(())
    }

    fn check_endpoints(&self, from: VertexId, to: VertexId) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.num_vertices == other.num_vertices
            && self.visit_order == other.visit_order
            && self
                .adjacency
                .iter()
                .zip(&other.adjacency)
                .all(|(a, b)| a.iter().eq(b.iter()))
    }
}

impl Eq for Graph {}

/// 顶点邻接表的只读迭代器
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Rev<IndexMapIter<'a, VertexId, Weight>>,
}

impl Iterator for Neighbors<'_> {
    type Item = Adjacent;

    fn next(&mut self) -> Option<Adjacent> {
        self.inner
            .next()
            .map(|(&vertex, &weight)| Adjacent { vertex, weight })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<Adjacent> {
        self.inner
            .next_back()
            .map(|(&vertex, &weight)| Adjacent { vertex, weight })
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn neighbors(graph: &Graph, v: VertexId) -> Vec<(VertexId, Weight)> {
        graph
            .adjacency(v)
            .unwrap()
            .map(|a| (a.vertex, a.weight))
            .collect()
    }

    fn assert_symmetric(graph: &Graph) {
        for u in 0..graph.num_vertices() {
            for a in graph.adjacency(u).unwrap() {
                assert_ne!(a.vertex, u, "出现自环");
                assert_eq!(graph.weight(a.vertex, u), Some(a.weight));
            }
        }
    }

    #[test]
    fn test_new_graph() {
        assert!(Graph::new(0).unwrap_err().is_invalid_argument());

        let graph = Graph::new(1).unwrap();
        assert_eq!(graph.num_vertices(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.visit_count(), 0);
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(0, 1, 5).unwrap();

        assert_eq!(neighbors(&graph, 0), vec![(1, 5)]);
        assert_eq!(neighbors(&graph, 1), vec![(0, 5)]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_adjacency_most_recent_first() {
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(0, 2, 2).unwrap();
        graph.add_unit_edge(3, 0).unwrap();

        assert_eq!(neighbors(&graph, 0), vec![(3, 1), (2, 2), (1, 1)]);
        assert_eq!(graph.degree(0).unwrap(), 3);
    }

    #[test]
    fn test_add_edge_invalid_vertices() {
        let mut graph = Graph::new(3).unwrap();
        assert!(graph.add_edge(3, 0, 1).unwrap_err().is_out_of_range());
        assert!(graph.add_edge(0, 3, 1).unwrap_err().is_out_of_range());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_and_duplicate_rejected() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        let before = graph.clone();

        assert!(graph.add_edge(2, 2, 1).unwrap_err().is_invalid_argument());
        assert!(graph.add_edge(0, 1, 1).unwrap_err().is_invalid_argument());
        assert!(graph.add_edge(1, 0, 9).unwrap_err().is_invalid_argument());

        assert_eq!(graph, before);
        assert_symmetric(&graph);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(0, 2, 2).unwrap();
        graph.add_edge(0, 3, 3).unwrap();

        graph.remove_edge(2, 0).unwrap();
        assert!(!graph.has_edge(0, 2));
        assert!(!graph.has_edge(2, 0));
        assert_eq!(neighbors(&graph, 0), vec![(3, 3), (1, 1)]);
        assert_eq!(graph.edge_count(), 2);
        assert_symmetric(&graph);
    }

    #[test]
    fn test_remove_edge_errors() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 1).unwrap();

        assert!(graph.remove_edge(1, 2).unwrap_err().is_invalid_argument());
        assert!(graph.remove_edge(1, 1).unwrap_err().is_invalid_argument());
        assert!(graph.remove_edge(0, 7).unwrap_err().is_out_of_range());
        assert!(graph.has_edge(0, 1));
    }

    #[test]
    fn test_adjacency_out_of_range() {
        let graph = Graph::new(2).unwrap();
        assert!(graph.adjacency(2).unwrap_err().is_out_of_range());
        assert!(graph.degree(5).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_deep_copy_independence() {
        let mut original = Graph::new(3).unwrap();
        original.add_edge(0, 1, 1).unwrap();
        original.add_edge(1, 2, 2).unwrap();

        let mut copy = original.clone();
        original.add_edge(0, 2, 3).unwrap();
        assert!(!copy.has_edge(0, 2));

        copy.remove_edge(0, 1).unwrap();
        assert!(original.has_edge(0, 1));

        copy.initialize_visit_order();
        copy.set_visit_order(0, 2).unwrap();
        assert_eq!(original.visit_count(), 0);
    }

    #[test]
    fn test_visit_order() {
        let mut graph = Graph::new(3).unwrap();
        graph.initialize_visit_order();
        graph.set_visit_order(0, 2).unwrap();
        graph.set_visit_order(1, 0).unwrap();

        assert_eq!(graph.visit_count(), 2);
        assert_eq!(graph.visit_order_at(0).unwrap(), 2);
        assert_eq!(graph.visit_order_at(1).unwrap(), 0);
        assert!(graph.visit_order_at(2).unwrap_err().is_out_of_range());

        assert!(graph.set_visit_order(5, 1).unwrap_err().is_invalid_argument());
        assert!(graph.set_visit_order(2, 3).unwrap_err().is_out_of_range());
        graph.set_visit_order(2, 1).unwrap();
        assert!(graph.set_visit_order(3, 1).unwrap_err().is_overflow());

        graph.initialize_visit_order();
        assert_eq!(graph.visit_count(), 0);
        assert!(graph.visit_order().is_empty());
    }

    #[test]
    fn test_edges_listing() {
        let graph = Graph::from_edges(4, vec![(0, 1, 1), (2, 0, 4), (1, 2, 2), (3, 2, 1)]).unwrap();

        let edges = graph.edges();
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| e.from < e.to));
        assert_eq!(edges[0], Edge::new(0, 2, 4));
        assert_eq!(edges[1], Edge::new(0, 1, 1));
        assert_eq!(graph.total_weight(), 8);
    }

    #[test]
    fn test_render_follows_visit_order() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 2).unwrap();

        assert_eq!(graph.render(), "");

        graph.initialize_visit_order();
        graph.set_visit_order(0, 2).unwrap();
        graph.set_visit_order(1, 0).unwrap();
        assert_eq!(graph.render(), "2: (1, w=2) \n0: (1, w=1) \n");
    }

    #[test]
    fn test_render_all() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 2).unwrap();

        let full = "0: (1, w=1) \n1: (2, w=2) (0, w=1) \n2: (1, w=2) \n";
        assert_eq!(graph.render_all(), full);

        graph.initialize_visit_order();
        graph.set_visit_order(0, 2).unwrap();
        assert_eq!(graph.render_all(), full);
    }

    #[test]
    fn test_equality_respects_adjacency_order() {
        let a = Graph::from_edges(3, vec![(0, 1, 1), (0, 2, 1)]).unwrap();
        let b = Graph::from_edges(3, vec![(0, 2, 1), (0, 1, 1)]).unwrap();
        assert_ne!(a, b);
        assert_ne!(a.render_all(), b.render_all());

        let c = Graph::from_edges(3, vec![(0, 1, 1), (0, 2, 1)]).unwrap();
        assert_eq!(a, c);

        let mut visited = c.clone();
        visited.set_visit_order(0, 0).unwrap();
        assert_ne!(c, visited);
    }

    #[test]
    fn test_random_operations_keep_symmetry() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let n = 12;
        let mut graph = Graph::new(n).unwrap();

        for _ in 0..2000 {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            let existed = graph.has_edge(u, v);

            if rng.gen_bool(0.6) {
                let result = graph.add_edge(u, v, rng.gen_range(-5..20));
                assert_eq!(result.is_ok(), u != v && !existed);
            } else {
                let result = graph.remove_edge(u, v);
                assert_eq!(result.is_ok(), u != v && existed);
            }

            assert_symmetric(&graph);
            assert_eq!(graph.edges().len(), graph.edge_count());
        }
    }
}
