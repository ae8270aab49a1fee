//! 通用类型定义

/// 顶点 ID（`0..n` 的下标）
pub type VertexId = usize;

/// 边权重
pub type Weight = i64;

/// 未指定权重时使用的默认边权
pub const DEFAULT_WEIGHT: Weight = 1;
