use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use tradeshift_core::watchlist::{NewWatchlistItem, QuotedWatchlistItem, WatchlistItem};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn list_watchlist(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<QuotedWatchlistItem>>> {
    let items = state.watchlist_service.list_with_quotes(&user.user_id).await?;
    Ok(Json(items))
}

async fn add_to_watchlist(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(body): Json<NewWatchlistItem>,
) -> ApiResult<(StatusCode, Json<WatchlistItem>)> {
    let item = state
        .watchlist_service
        .add_symbol(&user.user_id, &body.symbol)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn remove_from_watchlist(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.watchlist_service.remove(&user.user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/watchlist", get(list_watchlist).post(add_to_watchlist))
        .route("/watchlist/{id}", delete(remove_from_watchlist))
}
