//! 事件分发器（EventDispatcher）
//!
//! 对一批已 drain 的事件逐个分发：
//! - 事件按输入顺序处理，单个事件的全部处理器按注册顺序依次 await 完成后才处理下一个事件；
//! - 未注册处理器的事件类型视为 no-op；
//! - 处理器失败按 `FailurePolicy` 决定中止或收集后继续；
//! - 取消信号在每个处理器之前检查，并与处理器 future 竞争，取消后不再调用剩余处理器。
//!
use super::registry::{HandlerRegistry, RegisteredHandler};
use crate::domain_event::EventEnvelope;
use crate::error::{DomainError, DomainResult};
use crate::event_source::EventSourced;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// 处理器失败时的分发策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// 第一个失败即中止并返回错误
    #[default]
    FailFast,
    /// 记录失败并继续分发剩余处理器与事件
    Continue,
}

/// 分发器配置
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchConfig {
    pub failure_policy: FailurePolicy,
    /// 单个处理器的最长执行时间，超时视为处理器失败
    pub handler_timeout: Option<Duration>,
}

/// 单个处理器的失败记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub handler: String,
    pub event_type: String,
    pub event_id: Uuid,
    pub reason: String,
}

impl From<HandlerFailure> for DomainError {
    fn from(failure: HandlerFailure) -> Self {
        DomainError::EventHandler {
            handler: failure.handler,
            event_type: failure.event_type,
            reason: failure.reason,
        }
    }
}

/// 一次分发的统计结果
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// 已处理的事件数
    pub events: usize,
    /// 已调用的处理器次数
    pub invocations: usize,
    /// `FailurePolicy::Continue` 下收集到的失败
    pub failures: Vec<HandlerFailure>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

enum InvokeError {
    Cancelled,
    Failed(String),
}

/// 顺序事件分发器
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    registry: Arc<HandlerRegistry>,
    config: DispatchConfig,
}

impl EventDispatcher {
    pub fn new(registry: Arc<HandlerRegistry>, config: DispatchConfig) -> Self {
        Self { registry, config }
    }

    /// 分发一批事件
    #[tracing::instrument(level = "debug", skip_all, fields(events = events.len()))]
    pub async fn dispatch(
        &self,
        events: &[EventEnvelope],
        cancel: &CancellationToken,
    ) -> DomainResult<DispatchReport> {
        let mut report = DispatchReport::default();

        for envelope in events {
            let metadata = envelope.metadata();
            let handlers = self.registry.handlers_for(envelope.payload_type());
            report.events += 1;

            if handlers.is_empty() {
                tracing::debug!(
                    event_type = metadata.event_type(),
                    "no handler registered, skipped"
                );
                continue;
            }

            for handler in handlers {
                if cancel.is_cancelled() {
                    return Err(Self::cancelled(envelope));
                }

                report.invocations += 1;
                match self.invoke(handler, envelope, cancel).await {
                    Ok(()) => {
                        tracing::debug!(
                            handler = handler.name(),
                            event_type = metadata.event_type(),
                            event_id = %metadata.event_id(),
                            "event handled"
                        );
                    }
                    Err(InvokeError::Cancelled) => return Err(Self::cancelled(envelope)),
                    Err(InvokeError::Failed(reason)) => {
                        tracing::warn!(
                            handler = handler.name(),
                            event_type = metadata.event_type(),
                            event_id = %metadata.event_id(),
                            %reason,
                            "event handler failed"
                        );
                        let failure = HandlerFailure {
                            handler: handler.name().to_string(),
                            event_type: metadata.event_type().to_string(),
                            event_id: metadata.event_id(),
                            reason,
                        };
                        match self.config.failure_policy {
                            FailurePolicy::FailFast => return Err(failure.into()),
                            FailurePolicy::Continue => report.failures.push(failure),
                        }
                    }
                }
            }
        }

        Ok(report)
    }

    /// 取出实体的待分发事件并分发
    pub async fn drain_and_dispatch<S>(
        &self,
        source: &mut S,
        cancel: &CancellationToken,
    ) -> DomainResult<DispatchReport>
    where
        S: EventSourced + ?Sized,
    {
        let events = source.drain_events();
        self.dispatch(&events, cancel).await
    }

    async fn invoke(
        &self,
        handler: &RegisteredHandler,
        envelope: &EventEnvelope,
        cancel: &CancellationToken,
    ) -> Result<(), InvokeError> {
        let run = async {
            match self.config.handler_timeout {
                Some(limit) => match tokio::time::timeout(limit, handler.call(envelope)).await {
                    Ok(result) => result.map_err(|e| format!("{e:#}")),
                    Err(_) => Err(format!("timed out after {limit:?}")),
                },
                None => handler.call(envelope).await.map_err(|e| format!("{e:#}")),
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(InvokeError::Cancelled),
            result = run => result.map_err(InvokeError::Failed),
        }
    }

    fn cancelled(envelope: &EventEnvelope) -> DomainError {
        tracing::info!(
            event_type = envelope.metadata().event_type(),
            event_id = %envelope.metadata().event_id(),
            "event dispatch cancelled"
        );
        DomainError::cancelled(format!(
            "dispatch cancelled at event {}",
            envelope.metadata().event_type()
        ))
    }
}
