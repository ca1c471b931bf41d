use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{config::Config, main_lib::AppState};

mod accounts;
mod auth;
mod dashboard;
mod health;
mod market;
mod portfolios;
mod trades;
mod users;
mod watchlist;

/// Builds the full application router. All routes live under `/api`;
/// auth and health are public, everything else requires a bearer token.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(health::router())
        .merge(users::router())
        .merge(accounts::router())
        .merge(portfolios::router())
        .merge(trades::router())
        .merge(market::router())
        .merge(watchlist::router())
        .merge(dashboard::router());

    let cors = match config
        .cors_origin
        .as_deref()
        .and_then(|o| o.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
