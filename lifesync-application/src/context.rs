use lifesync_domain::domain_event::BusinessContext;
use tokio_util::sync::CancellationToken;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用所需的横切信息，例如：
/// - 业务语境（`BusinessContext`）：关联追踪 `correlation_id`、执行者类型/ID 等；
/// - 取消信号（`cancellation`）：请求被放弃时中止当前等待点，不再调用剩余的事件处理器。
///
/// 典型用法：
/// ```rust
/// use lifesync_application::context::AppContext;
/// use lifesync_domain::domain_event::BusinessContext;
///
/// let ctx = AppContext::new(
///     BusinessContext::builder()
///         .maybe_correlation_id(Some("cor-123".into()))
///         .maybe_actor_type(Some("user".into()))
///         .maybe_actor_id(Some("u-1".into()))
///         .build(),
/// );
/// assert!(!ctx.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// 业务语境（链路追踪、审计主体）
    pub biz: BusinessContext,
    /// 请求级取消信号
    pub cancellation: CancellationToken,
}

impl AppContext {
    pub fn new(biz: BusinessContext) -> Self {
        Self {
            biz,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}
