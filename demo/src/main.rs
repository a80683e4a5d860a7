mod telemetry;

use anyhow::Context;
use clap::Parser;
use lifesync_application::UnitOfWork;
use lifesync_application::config::AppConfig;
use lifesync_application::context::AppContext;
use lifesync_application::finance::{
    BalanceProjection, InMemoryLedgerRepository, OpenLedgerRequest, TransactionRequest,
    TransactionService, register_finance_handlers,
};
use lifesync_domain::domain_event::BusinessContext;
use lifesync_domain::eventing::{EventDispatcher, HandlerRegistry};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;

/// LifeSync 记账核心演示：开立账本、记录收支并观察事件投影
#[derive(Debug, Parser)]
#[command(name = "lifesync-demo", version)]
struct Cli {
    /// TOML 配置文件路径（缺省使用内置默认值）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 账本持有人名称
    #[arg(long, default_value = "Ana")]
    owner: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    telemetry::init(&config.logging);

    // 启动期一次性构建只读注册表
    let projection = Arc::new(BalanceProjection::new());
    let registry =
        register_finance_handlers(HandlerRegistry::builder(), projection.clone()).build();
    let dispatcher = EventDispatcher::new(
        Arc::new(registry),
        config.dispatcher.to_dispatch_config(),
    );
    let service = TransactionService::new(
        Arc::new(InMemoryLedgerRepository::new()),
        UnitOfWork::new(Arc::new(dispatcher)),
    );

    let ctx = AppContext::new(
        BusinessContext::builder()
            .maybe_actor_type(Some("user".into()))
            .maybe_actor_id(Some(cli.owner.clone()))
            .build(),
    );

    let ledger = service
        .open_ledger(
            &ctx,
            OpenLedgerRequest {
                display_name: cli.owner.clone(),
                currency: "EUR".into(),
            },
        )
        .await?;
    let user_id = match ledger.into_result() {
        Ok(ledger) => ledger.id,
        Err(errors) => anyhow::bail!("cannot open ledger: {errors}"),
    };

    let requests = [
        (true, Decimal::new(250_000, 2), "Salary"),
        (false, Decimal::new(8990, 2), "Groceries"),
        (false, Decimal::ZERO, ""),
    ];
    for (is_income, amount, description) in requests {
        let request = TransactionRequest {
            amount,
            currency: "EUR".into(),
            description: description.into(),
        };
        let outcome = if is_income {
            service.add_income(&ctx, user_id, request).await?
        } else {
            service.add_expense(&ctx, user_id, request).await?
        };
        let response = serde_json::to_string(&outcome)?;
        tracing::info!(%response, "transaction request handled");
    }

    let summary = serde_json::to_string(&service.ledger_summary(user_id).await?)?;
    tracing::info!(
        response = %summary,
        projected_balance = ?projection.balance_of(&user_id),
        "ledger summary"
    );
    Ok(())
}
