use tradeshift_server::api::app_router;
use tradeshift_server::config::Config;
use tradeshift_server::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // dotenv must load before tracing init reads TS_LOG_FORMAT.
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env();
    if std::env::var("TS_JWT_SECRET").is_err() {
        tracing::warn!("TS_JWT_SECRET is not set, using an ephemeral secret");
    }
    let state = build_state(&config).await?;

    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
