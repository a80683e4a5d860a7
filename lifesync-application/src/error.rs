use lifesync_domain::error::DomainError;

/// 应用层错误：仅用于仓储不可用、分发失败、取消与配置问题，
/// 业务可预期失败通过 `Outcome` 返回。
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("config: {0}")]
    Config(String),

    #[error("cancelled")]
    Cancelled,
}

impl AppError {
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Domain(err) => err.is_cancelled(),
            _ => false,
        }
    }
}
