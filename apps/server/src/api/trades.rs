use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use tradeshift_core::trading::{PlaceOrder, TradeOrder};

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Debug, Default, Deserialize)]
struct HistoryQuery {
    limit: Option<i64>,
}

async fn place_order(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<PlaceOrder>,
) -> ApiResult<(StatusCode, Json<TradeOrder>)> {
    let order = state.trade_service.place_order(&user.user_id, body).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn order_history(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<TradeOrder>>> {
    let orders = state
        .trade_service
        .list_for_user(&user.user_id, query.limit)?;
    Ok(Json(orders))
}

/// Admins can inspect any order; everyone else only their own. A foreign
/// order surfaces as 404 rather than 403 so ids cannot be probed.
async fn get_order(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TradeOrder>> {
    let order = state.trade_service.get_order(&id)?;
    if order.user_id != user.user_id && !user.is_admin() {
        return Err(ApiError::not_found(format!("Order not found: {}", id)));
    }
    Ok(Json(order))
}

async fn cancel_order(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TradeOrder>> {
    let order = state.trade_service.cancel_order(&user.user_id, &id).await?;
    Ok(Json(order))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trades", post(place_order).get(order_history))
        .route("/trades/{id}", get(get_order))
        .route("/trades/{id}/cancel", post(cancel_order))
}
