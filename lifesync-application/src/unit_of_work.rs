//! 工作单元（UnitOfWork）
//!
//! 封装"持久化 → drain → 分发"的标准流程：
//! 1. 先保存实体；保存失败则事件保持待分发状态，不会被分发；
//! 2. 保存成功后取出实体的待分发事件，并写入本次调用的业务语境；
//! 3. 交给分发器按序分发。
//!
//! 保存与分发之间不具备事务原子性：分发失败不会回滚已保存的状态。
//!
use crate::{context::AppContext, error::AppError};
use lifesync_domain::domain_event::EventEnvelope;
use lifesync_domain::entity::Entity;
use lifesync_domain::event_source::EventSourced;
use lifesync_domain::eventing::{DispatchReport, EventDispatcher};
use lifesync_domain::persist::Repository;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UnitOfWork {
    dispatcher: Arc<EventDispatcher>,
}

impl UnitOfWork {
    pub fn new(dispatcher: Arc<EventDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// 保存实体并分发其待分发事件
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            entity_id = %entity.id(),
            correlation_id = ctx.biz.correlation_id(),
            actor_id = ctx.biz.actor_id(),
        )
    )]
    pub async fn commit<E, R>(
        &self,
        ctx: &AppContext,
        repo: &R,
        entity: &mut E,
    ) -> Result<DispatchReport, AppError>
    where
        E: Entity + EventSourced,
        R: Repository<E> + ?Sized,
    {
        if ctx.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        repo.save(entity).await?;

        let events: Vec<EventEnvelope> = entity
            .drain_events()
            .into_iter()
            .map(|envelope| envelope.with_context(ctx.biz.clone()))
            .collect();
        let report = self
            .dispatcher
            .dispatch(&events, &ctx.cancellation)
            .await
            .inspect_err(|err| {
                tracing::error!(error = %err, "event dispatch failed after save");
            })?;

        if !report.is_clean() {
            tracing::warn!(
                failures = report.failures.len(),
                "some event handlers failed"
            );
        }
        Ok(report)
    }
}
