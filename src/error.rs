//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 顶点索引越界，或从空容器中取元素
    #[error("越界: {0}")]
    OutOfRange(String),

    /// 自环、重复边、缺失边、优先级只能降低等参数错误
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 向已满的有界容器插入
    #[error("容量溢出: {0}")]
    Overflow(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl Error {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow(_))
    }
}
