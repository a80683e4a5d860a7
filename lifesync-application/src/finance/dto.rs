use super::model::{Transaction, TransactionKind, UserLedger};
use crate::dto::Dto;
use chrono::{DateTime, Utc};
use lifesync_domain::entity::Entity;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl TransactionDto {
    pub fn from_transaction(transaction: &Transaction, currency: &str) -> Self {
        Self {
            id: transaction.id,
            kind: transaction.kind,
            amount: transaction.amount,
            currency: currency.to_string(),
            description: transaction.description.clone(),
            created_at: transaction.created_at,
        }
    }
}

impl Dto for TransactionDto {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDto {
    pub id: Uuid,
    pub display_name: String,
    pub currency: String,
    pub balance: Decimal,
    pub transaction_count: usize,
}

impl From<&UserLedger> for LedgerDto {
    fn from(ledger: &UserLedger) -> Self {
        Self {
            id: *ledger.id(),
            display_name: ledger.display_name().to_string(),
            currency: ledger.currency().to_string(),
            balance: ledger.balance(),
            transaction_count: ledger.transactions().len(),
        }
    }
}

impl Dto for LedgerDto {}
