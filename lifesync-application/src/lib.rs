//! LifeSync 应用层（lifesync-application）
//!
//! 编排领域层构件完成一次用例调用：加载实体 → 执行变更 → 工作单元持久化并分发事件 →
//! 向接口层返回 `Outcome`/`MessageOutcome`。
//!
pub mod config;
pub mod context;
pub mod dto;
pub mod error;
pub mod finance;
pub mod unit_of_work;

pub use unit_of_work::UnitOfWork;
