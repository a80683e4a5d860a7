//! 收支记账功能切片（finance）
//!
//! - `UserLedger`：用户账本实体，记录收入/支出并累积领域事件；
//! - `TransactionService`：面向接口层的用例入口，返回 `Outcome`/`MessageOutcome`；
//! - `BalanceProjection`：订阅账本事件维护余额投影；
//! - `InMemoryLedgerRepository`：基于 `DashMap` 的仓储实现（测试与本地演示）。
//!
mod dto;
mod events;
mod handlers;
mod model;
mod repository;
mod request;
mod service;

pub use dto::{LedgerDto, TransactionDto};
pub use events::{
    ExpenseTransactionCreated, IncomeTransactionCreated, LedgerOpened, TransactionRemoved,
};
pub use handlers::{BalanceProjection, register_finance_handlers};
pub use model::{Transaction, TransactionKind, UserLedger};
pub use repository::InMemoryLedgerRepository;
pub use request::{OpenLedgerRequest, TransactionRequest};
pub use service::TransactionService;
