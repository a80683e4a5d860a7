use super::dto::{LedgerDto, TransactionDto};
use super::model::{TransactionKind, UserLedger};
use super::request::{OpenLedgerRequest, TransactionRequest};
use crate::{UnitOfWork, context::AppContext, error::AppError};
use lifesync_domain::entity::Entity;
use lifesync_domain::outcome::{MessageOutcome, Outcome};
use lifesync_domain::persist::Repository;
use std::sync::Arc;
use uuid::Uuid;

const USER_NOT_FOUND: &str = "User not found";
const TRANSACTION_NOT_FOUND: &str = "Transaction not found";

/// 收支用例服务
///
/// 返回约定：
/// - 校验失败、用户/记录不存在等业务失败 → `Ok(Outcome::Failure)`；
/// - 存储不可达、事件分发失败、取消 → `Err(AppError)`，此时主写入可能已经持久化。
///
/// 无并发控制：同一用户的并发写入各自加载账本副本再整体保存，后保存者覆盖先保存者，
/// 先前的那笔记录会丢失；而 `BalanceProjection` 对两次事件都会累加，
/// 因此投影余额可能偏离 `UserLedger::balance()`。调用方需按用户串行化写操作。
pub struct TransactionService {
    ledgers: Arc<dyn Repository<UserLedger>>,
    uow: UnitOfWork,
}

impl TransactionService {
    pub fn new(ledgers: Arc<dyn Repository<UserLedger>>, uow: UnitOfWork) -> Self {
        Self { ledgers, uow }
    }

    #[tracing::instrument(skip_all)]
    pub async fn open_ledger(
        &self,
        ctx: &AppContext,
        request: OpenLedgerRequest,
    ) -> Result<Outcome<LedgerDto>, AppError> {
        if let Err(errors) = request.validate() {
            return Ok(Outcome::from_errors(errors));
        }

        let mut ledger = UserLedger::open(request.display_name.trim(), request.currency);
        self.uow.commit(ctx, self.ledgers.as_ref(), &mut ledger).await?;

        tracing::info!(user_id = %ledger.id(), "ledger opened");
        Ok(Outcome::success(LedgerDto::from(&ledger)))
    }

    pub async fn add_income(
        &self,
        ctx: &AppContext,
        user_id: Uuid,
        request: TransactionRequest,
    ) -> Result<Outcome<TransactionDto>, AppError> {
        self.add_transaction(ctx, user_id, TransactionKind::Income, request)
            .await
    }

    pub async fn add_expense(
        &self,
        ctx: &AppContext,
        user_id: Uuid,
        request: TransactionRequest,
    ) -> Result<Outcome<TransactionDto>, AppError> {
        self.add_transaction(ctx, user_id, TransactionKind::Expense, request)
            .await
    }

    #[tracing::instrument(skip(self, ctx))]
    pub async fn remove_transaction(
        &self,
        ctx: &AppContext,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<MessageOutcome, AppError> {
        let mut ledger = match self.load(user_id).await?.into_result() {
            Ok(ledger) => ledger,
            Err(errors) => return Ok(MessageOutcome::from_errors(errors)),
        };

        if ledger.remove_transaction(transaction_id).is_none() {
            return Ok(MessageOutcome::not_found(TRANSACTION_NOT_FOUND));
        }
        self.uow.commit(ctx, self.ledgers.as_ref(), &mut ledger).await?;

        Ok(MessageOutcome::success("Transaction removed"))
    }

    pub async fn list_transactions(
        &self,
        user_id: Uuid,
    ) -> Result<Outcome<Vec<TransactionDto>>, AppError> {
        Ok(self.load(user_id).await?.map(|ledger| {
            ledger
                .transactions()
                .iter()
                .map(|t| TransactionDto::from_transaction(t, ledger.currency()))
                .collect()
        }))
    }

    pub async fn ledger_summary(&self, user_id: Uuid) -> Result<Outcome<LedgerDto>, AppError> {
        Ok(self.load(user_id).await?.map(|ledger| LedgerDto::from(&ledger)))
    }

    #[tracing::instrument(skip(self, ctx, request))]
    async fn add_transaction(
        &self,
        ctx: &AppContext,
        user_id: Uuid,
        kind: TransactionKind,
        request: TransactionRequest,
    ) -> Result<Outcome<TransactionDto>, AppError> {
        if let Err(errors) = request.validate() {
            return Ok(Outcome::from_errors(errors));
        }

        let mut ledger = match self.load(user_id).await?.into_result() {
            Ok(ledger) => ledger,
            Err(errors) => return Ok(Outcome::from_errors(errors)),
        };

        if request.currency != ledger.currency() {
            return Ok(Outcome::failure(format!(
                "Currency must match ledger currency ({})",
                ledger.currency()
            )));
        }

        let description = request.description.trim().to_string();
        let transaction = match kind {
            TransactionKind::Income => ledger.record_income(request.amount, description),
            TransactionKind::Expense => ledger.record_expense(request.amount, description),
        };
        self.uow.commit(ctx, self.ledgers.as_ref(), &mut ledger).await?;

        Ok(Outcome::success(TransactionDto::from_transaction(
            &transaction,
            ledger.currency(),
        )))
    }

    async fn load(&self, user_id: Uuid) -> Result<Outcome<UserLedger>, AppError> {
        Ok(match self.ledgers.find(&user_id).await? {
            Some(ledger) => Outcome::success(ledger),
            None => Outcome::not_found(USER_NOT_FOUND),
        })
    }
}
