//! 领域事件（Domain Event）
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`），以及将类型擦除后的事件与
//! 元数据封装在一起的 `EventEnvelope`。事件一经构造即不可变。

mod business_context;
mod domain_event_trait;
mod event_envelope;
mod metadata;

pub use business_context::BusinessContext;
pub use domain_event_trait::{AsAny, DomainEvent};
pub use event_envelope::EventEnvelope;
pub use metadata::Metadata;
