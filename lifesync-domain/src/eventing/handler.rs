//! 事件处理器（EventHandler）
//!
//! 针对单一具体事件类型的处理逻辑；同一结构体可为多个事件类型分别实现。
//!
use crate::domain_event::{DomainEvent, Metadata};
use async_trait::async_trait;

/// 事件处理器：处理某一具体类型的事件
#[async_trait]
pub trait EventHandler<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理器名称（用于日志与失败报告）
    fn handler_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 处理事件
    async fn handle(&self, event: &E, metadata: &Metadata) -> anyhow::Result<()>;
}
