use super::events::{
    ExpenseTransactionCreated, IncomeTransactionCreated, LedgerOpened, TransactionRemoved,
};
use async_trait::async_trait;
use dashmap::DashMap;
use lifesync_domain::domain_event::Metadata;
use lifesync_domain::eventing::{EventHandler, HandlerRegistryBuilder};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// 余额投影：按用户维护实时余额，供查询侧直接读取
#[derive(Debug, Default)]
pub struct BalanceProjection {
    balances: DashMap<Uuid, Decimal>,
}

impl BalanceProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, user_id: &Uuid) -> Option<Decimal> {
        self.balances.get(user_id).map(|b| *b.value())
    }

    fn apply(&self, user_id: Uuid, delta: Decimal) {
        *self.balances.entry(user_id).or_default() += delta;
    }
}

#[async_trait]
impl EventHandler<LedgerOpened> for BalanceProjection {
    fn handler_name(&self) -> &str {
        "balance_projection"
    }

    async fn handle(&self, event: &LedgerOpened, _metadata: &Metadata) -> anyhow::Result<()> {
        self.balances.entry(event.user_id).or_default();
        Ok(())
    }
}

#[async_trait]
impl EventHandler<IncomeTransactionCreated> for BalanceProjection {
    fn handler_name(&self) -> &str {
        "balance_projection"
    }

    async fn handle(
        &self,
        event: &IncomeTransactionCreated,
        _metadata: &Metadata,
    ) -> anyhow::Result<()> {
        self.apply(event.user_id, event.transaction.amount);
        Ok(())
    }
}

#[async_trait]
impl EventHandler<ExpenseTransactionCreated> for BalanceProjection {
    fn handler_name(&self) -> &str {
        "balance_projection"
    }

    async fn handle(
        &self,
        event: &ExpenseTransactionCreated,
        _metadata: &Metadata,
    ) -> anyhow::Result<()> {
        self.apply(event.user_id, -event.transaction.amount);
        Ok(())
    }
}

#[async_trait]
impl EventHandler<TransactionRemoved> for BalanceProjection {
    fn handler_name(&self) -> &str {
        "balance_projection"
    }

    async fn handle(&self, event: &TransactionRemoved, _metadata: &Metadata) -> anyhow::Result<()> {
        self.apply(event.user_id, -event.transaction.signed_amount());
        Ok(())
    }
}

/// 注册记账切片的全部处理器（启动期调用）
pub fn register_finance_handlers(
    builder: HandlerRegistryBuilder,
    projection: Arc<BalanceProjection>,
) -> HandlerRegistryBuilder {
    builder
        .register::<LedgerOpened, _>(projection.clone())
        .register::<IncomeTransactionCreated, _>(projection.clone())
        .register::<ExpenseTransactionCreated, _>(projection.clone())
        .register::<TransactionRemoved, _>(projection)
}
