use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use tradeshift_core::{
    accounts::{BrokerageAccountService, BrokerageAccountServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait},
    quotes::{QuoteService, QuoteServiceTrait},
    trading::{TradeService, TradeServiceTrait},
    users::{UserService, UserServiceTrait},
    watchlist::{WatchlistService, WatchlistServiceTrait},
};
use tradeshift_storage_sqlite::{
    accounts::BrokerageAccountRepository, db, portfolio::PortfolioRepository, quotes::QuoteStore,
    trading::TradeOrderRepository, users::UserRepository, watchlist::WatchlistRepository,
};

use crate::{auth::AuthManager, config::Config};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub account_service: Arc<dyn BrokerageAccountServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub trade_service: Arc<dyn TradeServiceTrait>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub watchlist_service: Arc<dyn WatchlistServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("TS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(user_repo));

    let account_repo = Arc::new(BrokerageAccountRepository::new(pool.clone(), writer.clone()));
    let account_service: Arc<dyn BrokerageAccountServiceTrait> =
        Arc::new(BrokerageAccountService::new(account_repo));

    let quote_store = Arc::new(QuoteStore::new(pool.clone(), writer.clone()));
    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::new(quote_store));

    let portfolio_repo = Arc::new(PortfolioRepository::new(pool.clone(), writer.clone()));
    let portfolio_service: Arc<dyn PortfolioServiceTrait> =
        Arc::new(PortfolioService::new(portfolio_repo));

    let trade_repo = Arc::new(TradeOrderRepository::new(pool.clone(), writer.clone()));
    let trade_service: Arc<dyn TradeServiceTrait> = Arc::new(TradeService::new(
        trade_repo,
        account_service.clone(),
        quote_service.clone(),
    ));

    let watchlist_repo = Arc::new(WatchlistRepository::new(pool.clone(), writer.clone()));
    let watchlist_service: Arc<dyn WatchlistServiceTrait> = Arc::new(WatchlistService::new(
        watchlist_repo,
        quote_service.clone(),
    ));

    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new(
        portfolio_service.clone(),
        trade_service.clone(),
        account_service.clone(),
    ));

    let auth = Arc::new(AuthManager::new(
        &config.jwt_secret,
        config.token_ttl_hours,
    ));

    Ok(Arc::new(AppState {
        user_service,
        account_service,
        portfolio_service,
        trade_service,
        quote_service,
        watchlist_service,
        dashboard_service,
        auth,
        db_path,
    }))
}
