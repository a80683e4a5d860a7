//! 持久化（persist）
//!
//! 仅定义实体仓储接口；存储引擎、表结构与事务边界均由外部协作者实现。
//!
mod repository;

pub use repository::Repository;
