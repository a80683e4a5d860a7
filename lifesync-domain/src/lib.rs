//! LifeSync 领域层基础库（lifesync-domain）
//!
//! 为记账服务的各个功能切片提供统一的横切构件：
//! - 操作结果（`outcome`）：`Outcome<T>` 与 `MessageOutcome`，以和类型表达成功/失败，
//!   业务可预期的失败不走 panic/异常通道；
//! - 领域事件（`domain_event`）与事件累积（`event_source`）：实体只负责记录"发生了什么"；
//! - 事件分发（`eventing`）：启动期构建的只读处理器注册表与按序分发器；
//! - 仓储接口（`persist`）：持久化由外部协作者实现，本 crate 仅定义接口。
//!
//! 典型用法：
//! 1. 定义实体并嵌入 `EventSource`，在业务变更时 `record` 事件；
//! 2. 启动时通过 `HandlerRegistry::builder()` 注册处理器并 `build`；
//! 3. 持久化成功后 `drain_events`，交给 `EventDispatcher::dispatch`；
//! 4. 服务向调用方返回 `Outcome`，而不是分发结果。
//!
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod event_source;
#[cfg(feature = "eventing")]
pub mod eventing;
pub mod outcome;
pub mod persist;
