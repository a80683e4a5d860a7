use super::{ErrorList, FailureKind, MessageOutcome};
use crate::error::DomainResult;
use serde::{Serialize, Serializer};

/// 携带数据的操作结果
///
/// 成功与失败互斥：成功时无错误，失败时错误列表非空。
/// 访问值前必须先区分分支；`unwrap_value` 仅用于调用方已确认成功的场景。
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorList),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// 以单条校验错误构造失败
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(ErrorList::new(error))
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::Failure(ErrorList::not_found(error))
    }

    pub fn from_errors(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }

    /// 以多条错误构造失败，空序列被拒绝
    pub fn try_failures<I, S>(errors: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ErrorList::try_from_iter(errors).map(Self::Failure)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// 错误列表；成功时为空切片
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

    pub fn into_result(self) -> Result<T, ErrorList> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// 取出成功值；对失败结果调用属于编程错误，直接 panic
    #[track_caller]
    pub fn unwrap_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => {
                panic!("called `Outcome::unwrap_value` on a failure outcome: {errors}")
            }
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// 丢弃数据转换为消息结果：成功需显式提供消息，失败原样复制错误列表
    pub fn into_message(self, success_message: impl Into<String>) -> MessageOutcome {
        match self {
            Self::Success(_) => MessageOutcome::success(success_message),
            Self::Failure(errors) => MessageOutcome::Failure(errors),
        }
    }
}

impl<T> From<ErrorList> for Outcome<T> {
    fn from(errors: ErrorList) -> Self {
        Self::Failure(errors)
    }
}

impl<T> From<Result<T, ErrorList>> for Outcome<T> {
    fn from(result: Result<T, ErrorList>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(errors) => Self::Failure(errors),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeWire<'a, T> {
    is_success: bool,
    data: Option<&'a T>,
    errors: &'a [String],
}

// 接口层约定的形状：{"isSuccess": .., "data": .., "errors": [..]}
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeWire {
            is_success: self.is_success(),
            data: self.value(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn success_round_trips_value() {
        let outcome = Outcome::success(vec![1, 2, 3]);
        assert!(outcome.is_success());
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome.failure_kind(), None);
        assert_eq!(outcome.value(), Some(&vec![1, 2, 3]));
        assert_eq!(outcome.unwrap_value(), vec![1, 2, 3]);
    }

    #[test]
    fn failure_preserves_error_order() {
        let outcome: Outcome<u32> =
            Outcome::try_failures(["Amount is required", "Description is required"]).unwrap();
        assert!(outcome.is_failure());
        assert_eq!(outcome.value(), None);
        assert_eq!(
            outcome.errors(),
            ["Amount is required", "Description is required"]
        );
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Validation));
    }

    #[test]
    fn zero_errors_cannot_build_a_failure() {
        let err = Outcome::<u32>::try_failures(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyErrorList));
    }

    #[test]
    #[should_panic(expected = "failure outcome")]
    fn unwrap_value_on_failure_panics() {
        let outcome: Outcome<u32> = Outcome::not_found("User not found");
        let _ = outcome.unwrap_value();
    }

    #[test]
    fn combinators_short_circuit_on_failure() {
        let doubled = Outcome::success(21).map(|v| v * 2);
        assert_eq!(doubled, Outcome::Success(42));

        let chained: Outcome<i32> =
            Outcome::success(1).and_then(|_| Outcome::<i32>::not_found("missing"));
        assert_eq!(chained.errors(), ["missing"]);
        assert_eq!(chained.failure_kind(), Some(FailureKind::NotFound));

        let untouched = Outcome::<i32>::failure("bad").map(|v| v + 1);
        assert_eq!(untouched.errors(), ["bad"]);
    }

    #[test]
    fn into_message_copies_errors_verbatim() {
        let failed: Outcome<u32> = Outcome::try_failures(["a", "b"]).unwrap();
        let message = failed.into_message("unused");
        assert!(!message.is_success());
        assert_eq!(message.message(), "");
        assert_eq!(message.errors(), ["a", "b"]);

        let ok = Outcome::success(7).into_message("Saved");
        assert!(ok.is_success());
        assert_eq!(ok.message(), "Saved");
    }

    #[test]
    fn serializes_to_wire_shape() {
        let ok = serde_json::to_value(Outcome::success(5)).unwrap();
        assert_eq!(
            ok,
            serde_json::json!({"isSuccess": true, "data": 5, "errors": []})
        );

        let failed = serde_json::to_value(Outcome::<u32>::failure("nope")).unwrap();
        assert_eq!(
            failed,
            serde_json::json!({"isSuccess": false, "data": null, "errors": ["nope"]})
        );
    }
}
