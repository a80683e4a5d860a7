use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为 `Outcome<T>` 中 `T` 的载体，面向接口层序列化友好；
/// - 与领域实体解耦，避免将实体（及其待分发事件）直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}
