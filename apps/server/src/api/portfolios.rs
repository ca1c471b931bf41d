use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use tradeshift_core::portfolio::{NewAsset, NewPortfolio, PortfolioSummary, PortfolioWithAssets};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn list_portfolios(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<PortfolioWithAssets>>> {
    let portfolios = state.portfolio_service.list_for_owner(&user.user_id)?;
    Ok(Json(portfolios))
}

async fn create_portfolio(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<NewPortfolio>,
) -> ApiResult<(StatusCode, Json<PortfolioWithAssets>)> {
    let portfolio = state
        .portfolio_service
        .create_portfolio(&user.user_id, body)
        .await?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

async fn get_portfolio(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<PortfolioWithAssets>> {
    let portfolio = state.portfolio_service.get_for_owner(&user.user_id, &id)?;
    Ok(Json(portfolio))
}

async fn portfolio_summary(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state
        .portfolio_service
        .summary_for_owner(&user.user_id, &id)?;
    Ok(Json(summary))
}

async fn add_asset(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<NewAsset>,
) -> ApiResult<(StatusCode, Json<PortfolioWithAssets>)> {
    let portfolio = state
        .portfolio_service
        .add_asset(&user.user_id, &id, body)
        .await?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolios", get(list_portfolios).post(create_portfolio))
        .route("/portfolios/{id}", get(get_portfolio))
        .route("/portfolios/{id}/summary", get(portfolio_summary))
        .route("/portfolios/{id}/assets", post(add_asset))
}
