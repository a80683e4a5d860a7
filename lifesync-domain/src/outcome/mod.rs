//! 操作结果（Outcome）
//!
//! 服务层操作以返回值而非 panic 表达业务可预期的失败：
//! - `Outcome<T>`：成功携带数据，失败携带非空错误列表；
//! - `MessageOutcome`：成功携带提示消息，失败携带非空错误列表；
//! - `ErrorList`：有序且非空的错误消息集合，附带失败分类 `FailureKind`。
//!
//! 两种结果之间不存在隐式转换，需显式调用 [`Outcome::into_message`]。

mod data_outcome;
mod error_list;
mod message_outcome;

pub use data_outcome::Outcome;
pub use error_list::{ErrorList, FailureKind};
pub use message_outcome::MessageOutcome;
