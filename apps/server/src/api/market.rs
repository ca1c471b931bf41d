use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use tradeshift_core::quotes::Quote;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn get_price(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.get_quote(&symbol).await?;
    Ok(Json(quote))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/market/price/{symbol}", get(get_price))
}
