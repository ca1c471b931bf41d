use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use tradeshift_core::dashboard::DashboardSummary;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn dashboard(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state.dashboard_service.summary_for_user(&user.user_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(dashboard))
}
