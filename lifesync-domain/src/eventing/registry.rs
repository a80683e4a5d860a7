//! 处理器注册表（HandlerRegistry）
//!
//! 通过 `TypeId` 精确匹配事件类型（不做父类型/接口匹配），运行时以类型擦除方式调度。
//! 注册只在启动期经由 `HandlerRegistryBuilder` 完成，`build` 之后不可再修改，
//! 以 `Arc<HandlerRegistry>` 在请求间共享。
//!
use super::handler::EventHandler;
use crate::domain_event::{DomainEvent, EventEnvelope};
use crate::error::DomainError;
use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub(crate) type HandlerFuture<'a> =
    Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

type HandlerFn = Arc<dyn for<'a> Fn(&'a EventEnvelope) -> HandlerFuture<'a> + Send + Sync>;

fn erase<F>(f: F) -> HandlerFn
where
    F: for<'a> Fn(&'a EventEnvelope) -> HandlerFuture<'a> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 已注册的（类型擦除后的）处理器
#[derive(Clone)]
pub struct RegisteredHandler {
    name: String,
    event_type_name: &'static str,
    call: HandlerFn,
}

impl RegisteredHandler {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 所处理事件的 Rust 类型名
    pub fn event_type_name(&self) -> &'static str {
        self.event_type_name
    }

    pub(crate) fn call<'a>(&self, envelope: &'a EventEnvelope) -> HandlerFuture<'a> {
        (self.call)(envelope)
    }
}

impl fmt::Debug for RegisteredHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredHandler")
            .field("name", &self.name)
            .field("event_type_name", &self.event_type_name)
            .finish_non_exhaustive()
    }
}

/// 只读的处理器注册表
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    by_type: HashMap<TypeId, Vec<RegisteredHandler>>,
}

impl HandlerRegistry {
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// 按事件具体类型取处理器（保持注册顺序），未注册时为空切片
    pub fn handlers_for(&self, event_type: TypeId) -> &[RegisteredHandler] {
        self.by_type
            .get(&event_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn handler_count<E: DomainEvent>(&self) -> usize {
        self.handlers_for(TypeId::of::<E>()).len()
    }

    /// 注册条目总数（重复注册分别计数）
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.values().all(Vec::is_empty)
    }
}

/// 注册表构建器（仅在启动期使用）
#[derive(Debug, Default)]
pub struct HandlerRegistryBuilder {
    by_type: HashMap<TypeId, Vec<RegisteredHandler>>,
}

impl HandlerRegistryBuilder {
    /// 为事件类型 `E` 注册处理器
    ///
    /// 同一处理器重复注册会被重复调用，处理器的幂等性由调用方保证。
    pub fn register<E, H>(mut self, handler: Arc<H>) -> Self
    where
        E: DomainEvent,
        H: EventHandler<E> + 'static,
    {
        let name = EventHandler::<E>::handler_name(handler.as_ref()).to_string();

        let call = erase(move |envelope: &EventEnvelope| {
            let handler = handler.clone();

            Box::pin(async move {
                // 键与闭包同一泛型 E，正常情况下 downcast 不会失败
                match envelope.downcast_ref::<E>() {
                    Some(event) => {
                        EventHandler::<E>::handle(handler.as_ref(), event, envelope.metadata())
                            .await
                    }
                    None => Err(DomainError::TypeMismatch {
                        expected: type_name::<E>(),
                        found: envelope.payload_type_name(),
                    }
                    .into()),
                }
            })
        });

        self.by_type
            .entry(TypeId::of::<E>())
            .or_default()
            .push(RegisteredHandler {
                name,
                event_type_name: type_name::<E>(),
                call,
            });
        self
    }

    pub fn build(self) -> HandlerRegistry {
        tracing::debug!(
            event_types = self.by_type.len(),
            "event handler registry built"
        );
        HandlerRegistry {
            by_type: self.by_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_event::Metadata;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Created;
    impl DomainEvent for Created {
        fn event_type(&self) -> &'static str {
            "test.created"
        }
        fn owner_id(&self) -> String {
            "u-1".into()
        }
    }

    #[derive(Debug)]
    struct Removed;
    impl DomainEvent for Removed {
        fn event_type(&self) -> &'static str {
            "test.removed"
        }
        fn owner_id(&self) -> String {
            "u-1".into()
        }
    }

    struct Noop;

    #[async_trait]
    impl EventHandler<Created> for Noop {
        fn handler_name(&self) -> &str {
            "noop"
        }
        async fn handle(&self, _event: &Created, _metadata: &Metadata) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[async_trait]
    impl EventHandler<Removed> for Noop {
        async fn handle(&self, _event: &Removed, _metadata: &Metadata) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn lookup_is_exact_and_keeps_duplicates() {
        let noop = Arc::new(Noop);
        let registry = HandlerRegistry::builder()
            .register::<Created, _>(noop.clone())
            .register::<Created, _>(noop.clone())
            .register::<Removed, _>(noop)
            .build();

        assert_eq!(registry.handler_count::<Created>(), 2);
        assert_eq!(registry.handler_count::<Removed>(), 1);
        assert_eq!(registry.len(), 3);
        assert!(registry.handlers_for(TypeId::of::<String>()).is_empty());

        let names: Vec<&str> = registry
            .handlers_for(TypeId::of::<Created>())
            .iter()
            .map(RegisteredHandler::name)
            .collect();
        assert_eq!(names, vec!["noop", "noop"]);

        let removed = &registry.handlers_for(TypeId::of::<Removed>())[0];
        assert!(removed.name().ends_with("Noop"));
        assert!(removed.event_type_name().ends_with("Removed"));
    }

    #[test]
    fn empty_registry() {
        let registry = HandlerRegistry::builder().build();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
