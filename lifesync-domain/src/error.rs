//! 领域层统一错误定义
//!
//! 仅覆盖"非业务可预期"的失败：编程错误、处理器失败、取消与仓储错误。
//! 业务校验/未找到等可恢复失败通过 `Outcome` 传递，不在此处。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 结果模型 ---
    #[error("failure outcome requires at least one error")]
    EmptyErrorList,

    // --- 事件系统 ---
    #[error("event handler error: handler={handler}, event={event_type}, reason={reason}")]
    EventHandler {
        handler: String,
        event_type: String,
        reason: String,
    },
    #[error("operation cancelled: {reason}")]
    Cancelled { reason: String },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
}

impl DomainError {
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled {
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }

    /// 是否为取消（与处理器失败区分，调用方通常不应重试）
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
