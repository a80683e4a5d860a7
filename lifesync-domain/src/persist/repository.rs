use crate::entity::Entity;
use crate::error::DomainResult;
use async_trait::async_trait;

/// 实体仓储
///
/// 存储不可达等基础设施错误以 `DomainError::Repository` 返回；
/// "未找到"不是错误，以 `Ok(None)` / `Ok(false)` 表达。
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity,
{
    /// 按标识加载实体
    async fn find(&self, id: &E::Id) -> DomainResult<Option<E>>;

    /// 保存实体当前状态（新增或覆盖）
    async fn save(&self, entity: &E) -> DomainResult<()>;

    /// 删除实体，返回是否存在
    async fn remove(&self, id: &E::Id) -> DomainResult<bool>;
}
