//! 有界 FIFO 队列
//!
//! 固定容量的环形缓冲区，BFS 用它保存待访问顶点

use crate::error::{Error, Result};
use crate::types::VertexId;

/// 环形缓冲区实现的有界队列
#[derive(Debug, Clone)]
pub struct BoundedQueue {
    data: Vec<VertexId>,
    front: usize,
    rear: usize,
    size: usize,
}

impl BoundedQueue {
    /// 创建容量为 `capacity` 的空队列
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            front: 0,
            rear: 0,
            size: 0,
        }
    }

    /// 入队（队尾）
    pub fn enqueue(&mut self, value: VertexId) -> Result<()> {
        if self.size == self.capacity() {
            return Err(Error::Overflow(format!(
                "队列已满 (容量 {})",
                self.capacity()
            )));
        }
        self.data[self.rear] = value;
        self.rear = (self.rear + 1) % self.capacity();
        self.size += 1;
        Ok(())
    }

    /// 出队（队首）
    pub fn dequeue(&mut self) -> Result<VertexId> {
        if self.is_empty() {
            return Err(Error::OutOfRange("队列为空".to_string()));
        }
        let value = self.data[self.front];
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;
        Ok(value)
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// 从队首开始扫描当前占用的槽位
    pub fn contains(&self, value: VertexId) -> bool {
        (0..self.size).any(|i| self.data[(self.front + i) % self.capacity()] == value)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}
