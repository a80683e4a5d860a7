//! 实体（Entity）基础抽象
//!
//! 为实体提供统一的标识能力；事件累积能力通过组合 `EventSource` 获得，
//! 见 [`EventSourced`](crate::event_source::EventSourced)。
//!
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可显示、可比较与可克隆
    type Id: Clone + Display + Debug + Eq + Hash + Send + Sync;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
