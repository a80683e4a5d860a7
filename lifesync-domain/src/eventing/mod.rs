//! 事件分发子系统（eventing）
//!
//! - `EventHandler`：对某一具体事件类型的业务响应；
//! - `HandlerRegistry`：启动期一次性构建、此后只读的"事件类型 → 处理器列表"映射；
//! - `EventDispatcher`：按输入顺序逐个事件、按注册顺序逐个处理器地顺序执行，
//!   支持失败策略、单处理器超时与取消。
//!
//! 分发不参与主写入的事务：调用方应在持久化成功之后再分发。
//!
pub mod dispatcher;
pub mod handler;
pub mod registry;

pub use dispatcher::{
    DispatchConfig, DispatchReport, EventDispatcher, FailurePolicy, HandlerFailure,
};
pub use handler::EventHandler;
pub use registry::{HandlerRegistry, HandlerRegistryBuilder, RegisteredHandler};
