use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use asset_tracker_core::{
    assets::{AssetService, AssetServiceTrait},
    banks::{BankService, BankServiceTrait},
    ib_accounts::{IbAccountService, IbAccountServiceTrait},
    ledger::{AssetLedgerTrait, InMemoryAssetLedger},
    summary::{PortfolioSummaryService, PortfolioSummaryServiceTrait},
    users::{UserService, UserServiceTrait},
};
use asset_tracker_storage_sqlite::{
    db::{self, DbPool},
    AssetRepository, BankRepository, IbAccountRepository, LedgerRepository, UserRepository,
};

use crate::config::{Config, LedgerBackend, LogFormat};

pub struct AppState {
    pub ledger: Arc<dyn AssetLedgerTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub bank_service: Arc<dyn BankServiceTrait>,
    pub ib_account_service: Arc<dyn IbAccountServiceTrait>,
    pub asset_service: Arc<dyn AssetServiceTrait>,
    pub portfolio_summary_service: Arc<dyn PortfolioSummaryServiceTrait>,
    pub pool: Arc<DbPool>,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let bank_repository = Arc::new(BankRepository::new(pool.clone(), writer.clone()));
    let ib_account_repository = Arc::new(IbAccountRepository::new(pool.clone(), writer.clone()));
    let asset_repository = Arc::new(AssetRepository::new(pool.clone(), writer.clone()));

    let ledger: Arc<dyn AssetLedgerTrait> = match config.ledger_backend {
        LedgerBackend::Memory => Arc::new(InMemoryAssetLedger::new()),
        LedgerBackend::Sqlite => Arc::new(LedgerRepository::new(pool.clone(), writer.clone())),
    };
    tracing::info!("Ledger backend: {:?}", config.ledger_backend);

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let bank_service = Arc::new(BankService::new(
        bank_repository.clone(),
        user_repository.clone(),
    ));
    let ib_account_service = Arc::new(IbAccountService::new(
        ib_account_repository.clone(),
        user_repository.clone(),
    ));
    let asset_service = Arc::new(AssetService::new(
        asset_repository.clone(),
        user_repository.clone(),
        bank_repository,
        ib_account_repository,
    ));
    let portfolio_summary_service = Arc::new(PortfolioSummaryService::new(
        asset_repository,
        user_repository,
    ));

    Ok(Arc::new(AppState {
        ledger,
        user_service,
        bank_service,
        ib_account_service,
        asset_service,
        portfolio_summary_service,
        pool,
    }))
}
