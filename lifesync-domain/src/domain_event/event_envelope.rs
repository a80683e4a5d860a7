use super::{BusinessContext, DomainEvent, Metadata};
use std::any::{TypeId, type_name};
use std::sync::Arc;

/// 事件信封：元数据 + 类型擦除后的事件载荷
///
/// 克隆只增加引用计数，载荷本身不可变。
#[derive(Debug, Clone)]
pub struct EventEnvelope {
    metadata: Metadata,
    payload: Arc<dyn DomainEvent>,
    payload_type: TypeId,
    payload_type_name: &'static str,
}

impl EventEnvelope {
    /// 以默认元数据（新事件 ID、当前时间）封装事件
    pub fn new<E: DomainEvent>(event: E) -> Self {
        Self::with_sequence(event, 0)
    }

    pub(crate) fn with_sequence<E: DomainEvent>(event: E, sequence: usize) -> Self {
        let metadata = Metadata::builder()
            .event_type(event.event_type())
            .owner_id(event.owner_id())
            .sequence(sequence)
            .build();

        Self {
            metadata,
            payload: Arc::new(event),
            payload_type: TypeId::of::<E>(),
            payload_type_name: type_name::<E>(),
        }
    }

    /// 附加业务语境（关联 ID、执行者）
    pub fn with_context(mut self, context: BusinessContext) -> Self {
        self.metadata.set_context(context);
        self
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn event(&self) -> &dyn DomainEvent {
        self.payload.as_ref()
    }

    /// 载荷的具体类型标识（用于精确匹配处理器）
    pub fn payload_type(&self) -> TypeId {
        self.payload_type
    }

    pub fn payload_type_name(&self) -> &'static str {
        self.payload_type_name
    }

    pub fn is<E: DomainEvent>(&self) -> bool {
        self.payload_type == TypeId::of::<E>()
    }

    /// 还原为具体事件类型，类型不符时返回 `None`
    pub fn downcast_ref<E: DomainEvent>(&self) -> Option<&E> {
        self.event().as_any().downcast_ref::<E>()
    }
}
