use crate::error::{DomainError, DomainResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// 失败分类，供接口层选择响应状态码；默认为校验失败
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    #[default]
    Validation,
    NotFound,
}

/// 非空、有序的错误消息列表
///
/// 不提供空列表的构造途径：`Failure` 至少包含一条错误。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorList {
    kind: FailureKind,
    errors: Vec<String>,
}

impl ErrorList {
    /// 以单条错误创建（校验失败）
    pub fn new(first: impl Into<String>) -> Self {
        Self::with_kind(FailureKind::Validation, first)
    }

    pub fn with_kind(kind: FailureKind, first: impl Into<String>) -> Self {
        Self {
            kind,
            errors: vec![first.into()],
        }
    }

    pub fn not_found(first: impl Into<String>) -> Self {
        Self::with_kind(FailureKind::NotFound, first)
    }

    /// 从任意序列创建，空序列返回 `DomainError::EmptyErrorList`
    pub fn try_from_iter<I, S>(errors: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let errors: Vec<String> = errors.into_iter().map(Into::into).collect();
        if errors.is_empty() {
            return Err(DomainError::EmptyErrorList);
        }
        Ok(Self {
            kind: FailureKind::default(),
            errors,
        })
    }

    /// 追加一条错误（保持顺序）
    pub fn push(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// 合并另一列表，保留本列表的分类
    pub fn extend(&mut self, other: ErrorList) {
        self.errors.extend(other.errors);
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// 第一条错误；列表非空，故总是存在
    pub fn first(&self) -> &str {
        self.errors.first().map(String::as_str).unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.errors
    }
}

impl Deref for ErrorList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.errors
    }
}

impl TryFrom<Vec<String>> for ErrorList {
    type Error = DomainError;

    fn try_from(errors: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_from_iter(errors)
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors.join("; "))
    }
}

// 对外序列化为纯字符串数组，与接口层的 `errors` 字段一致
impl Serialize for ErrorList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.errors)
    }
}
