use super::events::{
    ExpenseTransactionCreated, IncomeTransactionCreated, LedgerOpened, TransactionRemoved,
};
use chrono::{DateTime, Utc};
use lifesync_domain::entity::Entity;
use lifesync_domain::event_source::{EventSource, EventSourced};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// 单笔收支记录（金额恒为正，方向由 `kind` 表示）
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// 对余额的影响：收入为正，支出为负
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// 用户账本实体
///
/// 所有业务变更只记录事件，不负责分发。
#[derive(Debug, Clone, Default)]
pub struct UserLedger {
    id: Uuid,
    display_name: String,
    currency: String,
    transactions: Vec<Transaction>,
    events: EventSource,
}

impl UserLedger {
    /// 开立账本（调用方负责入参校验）
    pub fn open(display_name: impl Into<String>, currency: impl Into<String>) -> Self {
        let mut ledger = Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            currency: currency.into(),
            ..Default::default()
        };
        ledger.events.record(LedgerOpened {
            user_id: ledger.id,
            display_name: ledger.display_name.clone(),
            currency: ledger.currency.clone(),
        });
        ledger
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn balance(&self) -> Decimal {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn record_income(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Transaction {
        let transaction = self.push(TransactionKind::Income, amount, description.into());
        self.events.record(IncomeTransactionCreated {
            user_id: self.id,
            transaction: transaction.clone(),
        });
        transaction
    }

    pub fn record_expense(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Transaction {
        let transaction = self.push(TransactionKind::Expense, amount, description.into());
        self.events.record(ExpenseTransactionCreated {
            user_id: self.id,
            transaction: transaction.clone(),
        });
        transaction
    }

    /// 删除一笔记录；不存在时返回 `None` 且不记录事件
    pub fn remove_transaction(&mut self, transaction_id: Uuid) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id == transaction_id)?;
        let removed = self.transactions.remove(index);
        self.events.record(TransactionRemoved {
            user_id: self.id,
            transaction: removed.clone(),
        });
        Some(removed)
    }

    fn push(&mut self, kind: TransactionKind, amount: Decimal, description: String) -> Transaction {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            kind,
            amount,
            description,
            created_at: Utc::now(),
        };
        self.transactions.push(transaction.clone());
        transaction
    }
}

impl Entity for UserLedger {
    type Id = Uuid;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl EventSourced for UserLedger {
    fn event_source(&self) -> &EventSource {
        &self.events
    }

    fn event_source_mut(&mut self) -> &mut EventSource {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn mutations_record_events_in_order() {
        let mut ledger = UserLedger::open("Ana", "EUR");
        let salary = ledger.record_income(dec!(1500.00), "Salary");
        ledger.record_expense(dec!(49.90), "Groceries");
        ledger.remove_transaction(salary.id);

        let events = ledger.drain_events();
        let kinds: Vec<&str> = events.iter().map(|e| e.metadata().event_type()).collect();
        assert_eq!(
            kinds,
            vec![
                "finance.ledger_opened",
                "finance.income_created",
                "finance.expense_created",
                "finance.transaction_removed",
            ]
        );
        assert!(events.iter().all(|e| e.metadata().owner_id() == ledger.id().to_string()));
        assert!(ledger.drain_events().is_empty());
    }

    #[test]
    fn balance_is_incomes_minus_expenses() {
        let mut ledger = UserLedger::open("Ana", "EUR");
        ledger.record_income(dec!(100), "Gift");
        ledger.record_expense(dec!(30.5), "Dinner");
        assert_eq!(ledger.balance(), dec!(69.5));
    }

    #[test]
    fn removing_unknown_transaction_records_nothing() {
        let mut ledger = UserLedger::open("Ana", "EUR");
        let _ = ledger.drain_events();

        assert!(ledger.remove_transaction(Uuid::new_v4()).is_none());
        assert!(!ledger.has_pending_events());
    }

    #[test]
    fn event_snapshot_is_taken_at_creation() {
        let mut ledger = UserLedger::open("Ana", "EUR");
        let tx = ledger.record_income(dec!(10), "Refund");
        ledger.remove_transaction(tx.id);

        let events = ledger.drain_events();
        let created = events[1].downcast_ref::<IncomeTransactionCreated>().unwrap();
        assert_eq!(created.transaction, tx);
        assert!(ledger.transactions().is_empty());
    }
}
