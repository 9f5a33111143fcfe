mod chain;
mod error;
pub mod handle;
mod queue;
mod sort;

// 重新导出数据结构供外部使用
pub use chain::Iter;
pub use error::QueueError;
pub use queue::Queue;
