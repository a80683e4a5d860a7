use super::{ErrorList, FailureKind};
use serde::{Serialize, Serializer};

/// 携带提示消息的操作结果
///
/// 成功时消息可为空字符串；失败时 `message()` 返回空字符串。
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    Success(String),
    Failure(ErrorList),
}

impl MessageOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// 空消息的成功结果
    pub fn ok() -> Self {
        Self::Success(String::new())
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(ErrorList::new(error))
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::Failure(ErrorList::not_found(error))
    }

    pub fn from_errors(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) => message,
            Self::Failure(_) => "",
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors.as_slice(),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors.kind()),
        }
    }

    pub fn into_result(self) -> Result<String, ErrorList> {
        match self {
            Self::Success(message) => Ok(message),
            Self::Failure(errors) => Err(errors),
        }
    }
}

impl From<ErrorList> for MessageOutcome {
    fn from(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageWire<'a> {
    is_success: bool,
    message: &'a str,
    errors: &'a [String],
}

impl Serialize for MessageOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MessageWire {
            is_success: self.is_success(),
            message: self.message(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}
