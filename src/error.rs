//! 队列操作的错误类型

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// 复制元素值时无法分配存储，队列保持原状
    #[error("unable to allocate element storage: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("queue is empty")]
    EmptyQueue,
    #[error("output buffer is absent")]
    NullBuffer,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
