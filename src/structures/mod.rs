//! 辅助数据结构
//!
//! 图算法使用的有界队列、优先队列和并查集

mod priority_queue;
mod queue;
mod union_find;

pub use self::priority_queue::{BoundedPriorityQueue, HeapPriorityQueue, MinPriorityQueue};
pub use self::queue::BoundedQueue;
pub use self::union_find::UnionFind;
