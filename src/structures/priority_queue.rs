//! 有界最小优先队列
//!
//! `BoundedPriorityQueue` 用线性扫描取最小值，平局时取扫描顺序中的第一个；
//! `HeapPriorityQueue` 基于带索引的二叉堆，契约相同，平局顺序不做保证。

use crate::error::{Error, Result};
use crate::types::Weight;
use ::priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// 最小优先队列的公共契约
///
/// Dijkstra、Prim 和 Kruskal 都只通过这个 trait 访问优先队列。
pub trait MinPriorityQueue {
    /// 插入 `(id, priority)`；队满返回 `Overflow`，id 已存在返回 `InvalidArgument`
    fn insert(&mut self, id: usize, priority: Weight) -> Result<()>;

    /// 取出优先级最小的 id；队空返回 `OutOfRange`
    fn extract_min(&mut self) -> Result<usize>;

    /// 降低 id 的优先级；相同优先级为空操作，升高返回 `InvalidArgument`
    fn decrease_priority(&mut self, id: usize, new_priority: Weight) -> Result<()>;

    fn contains(&self, id: usize) -> bool;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 插入或降低优先级（松弛操作的常见写法）
    fn push_or_decrease(&mut self, id: usize, priority: Weight) -> Result<()> {
        if self.contains(id) {
            self.decrease_priority(id, priority)
        } else {
            self.insert(id, priority)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    id: usize,
    priority: Weight,
}

/// 线性扫描实现的有界优先队列
#[derive(Debug, Clone)]
pub struct BoundedPriorityQueue {
    entries: Vec<Entry>,
    capacity: usize,
}

impl BoundedPriorityQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// 查询 id 当前的优先级
    pub fn priority_of(&self, id: usize) -> Option<Weight> {
        self.position(id).map(|pos| self.entries[pos].priority)
    }

    fn position(&self, id: usize) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}

impl MinPriorityQueue for BoundedPriorityQueue {
    fn insert(&mut self, id: usize, priority: Weight) -> Result<()> {
        if self.entries.len() == self.capacity {
            return Err(Error::Overflow(format!(
                "优先队列已满 (容量 {})",
                self.capacity
            )));
        }
        if self.contains(id) {
            return Err(Error::InvalidArgument(format!(
                "优先队列中已存在 id {}",
                id
            )));
        }
        self.entries.push(Entry { id, priority });
        Ok(())
    }

    fn extract_min(&mut self) -> Result<usize> {
        if self.entries.is_empty() {
            return Err(Error::OutOfRange("优先队列为空".to_string()));
        }

        let mut min_pos = 0;
        for (i, entry) in self.entries.iter().enumerate().skip(1) {
            if entry.priority < self.entries[min_pos].priority {
                min_pos = i;
            }
        }

        // 末尾元素填补空位
        Ok(self.entries.swap_remove(min_pos).id)
    }

    fn decrease_priority(&mut self, id: usize, new_priority: Weight) -> Result<()> {
        let pos = self.position(id).ok_or_else(|| {
            Error::InvalidArgument(format!("优先队列中不存在 id {}", id))
        })?;

        let entry = &mut self.entries[pos];
        if new_priority > entry.priority {
            return Err(Error::InvalidArgument(format!(
                "新优先级 {} 高于当前优先级 {}",
                new_priority, entry.priority
            )));
        }
        entry.priority = new_priority;
        Ok(())
    }

    fn contains(&self, id: usize) -> bool {
        self.position(id).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// 二叉堆实现的有界优先队列
///
/// 取最小值和降低优先级都是 O(log n)。
#[derive(Debug, Clone)]
pub struct HeapPriorityQueue {
    heap: PriorityQueue<usize, Reverse<Weight>>,
    capacity: usize,
}

impl HeapPriorityQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: PriorityQueue::with_capacity(capacity),
            capacity,
        }
    }

    pub fn priority_of(&self, id: usize) -> Option<Weight> {
        self.heap.get_priority(&id).map(|p| p.0)
    }
}

impl MinPriorityQueue for HeapPriorityQueue {
    fn insert(&mut self, id: usize, priority: Weight) -> Result<()> {
        if self.heap.len() == self.capacity {
            return Err(Error::Overflow(format!(
                "优先队列已满 (容量 {})",
                self.capacity
            )));
        }
        if self.contains(id) {
            return Err(Error::InvalidArgument(format!(
                "优先队列中已存在 id {}",
                id
            )));
        }
        self.heap.push(id, Reverse(priority));
        Ok(())
    }

    fn extract_min(&mut self) -> Result<usize> {
        self.heap
            .pop()
            .map(|(id, _)| id)
            .ok_or_else(|| Error::OutOfRange("优先队列为空".to_string()))
    }

    fn decrease_priority(&mut self, id: usize, new_priority: Weight) -> Result<()> {
        let current = self.priority_of(id).ok_or_else(|| {
            Error::InvalidArgument(format!("优先队列中不存在 id {}", id))
        })?;

        if new_priority > current {
            return Err(Error::InvalidArgument(format!(
                "新优先级 {} 高于当前优先级 {}",
                new_priority, current
            )));
        }
        if new_priority < current {
            self.heap.change_priority(&id, Reverse(new_priority));
        }
        Ok(())
    }

    fn contains(&self, id: usize) -> bool {
        self.heap.get_priority(&id).is_some()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
