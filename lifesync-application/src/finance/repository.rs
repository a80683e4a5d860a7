use super::model::UserLedger;
use async_trait::async_trait;
use dashmap::DashMap;
use lifesync_domain::entity::Entity;
use lifesync_domain::error::{DomainError, DomainResult};
use lifesync_domain::persist::Repository;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

/// 基于 `DashMap` 的账本仓储
///
/// 加载返回的是存储副本，副本不携带待分发事件。
#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    ledgers: DashMap<Uuid, UserLedger>,
    unavailable: AtomicBool,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟存储不可达：之后的所有操作返回 `DomainError::Repository`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    fn ensure_available(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::repository("ledger store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<UserLedger> for InMemoryLedgerRepository {
    async fn find(&self, id: &Uuid) -> DomainResult<Option<UserLedger>> {
        self.ensure_available()?;
        Ok(self.ledgers.get(id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, ledger: &UserLedger) -> DomainResult<()> {
        self.ensure_available()?;
        self.ledgers.insert(*ledger.id(), ledger.clone());
        Ok(())
    }

    async fn remove(&self, id: &Uuid) -> DomainResult<bool> {
        self.ensure_available()?;
        Ok(self.ledgers.remove(id).is_some())
    }
}
