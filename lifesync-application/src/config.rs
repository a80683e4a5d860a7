//! 应用配置（AppConfig）
//!
//! 以 TOML 描述，所有段落均可省略并取默认值：
//!
//! ```toml
//! [logging]
//! filter = "lifesync=info"
//! format = "compact"
//!
//! [dispatcher]
//! failure_policy = "fail_fast"
//! handler_timeout_ms = 5000
//! ```
//!
use crate::error::AppError;
use lifesync_domain::eventing::{DispatchConfig, FailurePolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub dispatcher: DispatcherSettings,
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` 指令；设置了 `RUST_LOG` 时以环境变量为准
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lifesync=info,demo=info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatcherSettings {
    pub failure_policy: FailurePolicy,
    pub handler_timeout_ms: Option<u64>,
}

impl DispatcherSettings {
    pub fn to_dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            failure_policy: self.failure_policy,
            handler_timeout: self.handler_timeout_ms.map(Duration::from_millis),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(raw).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.dispatcher.handler_timeout_ms == Some(0) {
            return Err(AppError::Config(
                "dispatcher.handler_timeout_ms must be greater than 0".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(AppError::Config("logging.filter must not be empty".into()));
        }
        Ok(())
    }
}
