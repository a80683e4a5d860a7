use super::model::Transaction;
use lifesync_domain::domain_event::DomainEvent;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerOpened {
    pub user_id: Uuid,
    pub display_name: String,
    pub currency: String,
}

/// 收入记录已创建，携带创建时的记录快照
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeTransactionCreated {
    pub user_id: Uuid,
    pub transaction: Transaction,
}

/// 支出记录已创建，携带创建时的记录快照
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseTransactionCreated {
    pub user_id: Uuid,
    pub transaction: Transaction,
}

/// 记录已删除，携带删除前的快照
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRemoved {
    pub user_id: Uuid,
    pub transaction: Transaction,
}

impl DomainEvent for LedgerOpened {
    fn event_type(&self) -> &'static str {
        "finance.ledger_opened"
    }

    fn owner_id(&self) -> String {
        self.user_id.to_string()
    }
}

impl DomainEvent for IncomeTransactionCreated {
    fn event_type(&self) -> &'static str {
        "finance.income_created"
    }

    fn owner_id(&self) -> String {
        self.user_id.to_string()
    }
}

impl DomainEvent for ExpenseTransactionCreated {
    fn event_type(&self) -> &'static str {
        "finance.expense_created"
    }

    fn owner_id(&self) -> String {
        self.user_id.to_string()
    }
}

impl DomainEvent for TransactionRemoved {
    fn event_type(&self) -> &'static str {
        "finance.transaction_removed"
    }

    fn owner_id(&self) -> String {
        self.user_id.to_string()
    }
}
