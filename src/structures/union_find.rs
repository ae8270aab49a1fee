//! 并查集
//!
//! 路径压缩 + 按秩合并，Kruskal 用它判断加入一条边是否会成环

use crate::error::{Error, Result};

/// 不相交集合
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl UnionFind {
    /// 创建 `n` 个单元素集合
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// 返回 `x` 所在集合的代表元
    ///
    /// 路径上经过的每个节点都会直接指向根。
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// 合并 `x` 和 `y` 所在的集合
    ///
    /// 秩小的根挂到秩大的根下；秩相同时 `y` 的根挂到 `x` 的根下，`x` 的根秩加一。
    pub fn unite(&mut self, x: usize, y: usize) -> Result<()> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(());
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }
        self.sets -= 1;

        Ok(())
    }

    /// 判断两个元素是否在同一集合
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// 当前不相交集合的个数
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            return Err(Error::OutOfRange(format!(
                "元素 {} 超出范围 [0, {})",
                x,
                self.parent.len()
            )));
        }
        Ok(())
    }
}
