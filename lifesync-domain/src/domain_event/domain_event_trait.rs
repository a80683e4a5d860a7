use std::any::Any;
use std::fmt;

/// 取得 `&dyn Any` 以便按具体类型还原事件
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 领域事件载荷需要满足的通用能力边界
///
/// 具体事件通常为普通结构体，携带所属主体标识与受影响实体在事件发生时的快照。
pub trait DomainEvent: AsAny + fmt::Debug + Send + Sync + 'static {
    /// 事件类型（形如 `finance.income_created`），用于日志与审计
    fn event_type(&self) -> &'static str;

    /// 事件所属主体（如用户 ID）
    fn owner_id(&self) -> String;
}
