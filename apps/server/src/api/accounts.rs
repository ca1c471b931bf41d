use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use tradeshift_core::accounts::BrokerageAccount;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn list_accounts(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<BrokerageAccount>>> {
    let accounts = state.account_service.list_for_user(&user.user_id)?;
    Ok(Json(accounts))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/accounts", get(list_accounts))
}
