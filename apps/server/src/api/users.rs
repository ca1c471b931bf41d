use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use tradeshift_core::users::UserUpdate;

use crate::{
    api::auth::hash_password,
    auth::AdminUser,
    error::ApiResult,
    main_lib::AppState,
    models::{UserDto, UserUpdateRequest},
};

async fn list_users(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.user_service.list_users()?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user = state.user_service.get_user(&id)?;
    Ok(Json(user.into()))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(body): Json<UserUpdateRequest>,
) -> ApiResult<Json<UserDto>> {
    let password_hash = body.password.as_deref().map(hash_password).transpose()?;
    let update = UserUpdate {
        username: body.username,
        name: body.name,
        email: body.email,
        password_hash,
        contact_no: body.contact_no,
        role: body.role,
    };

    let user = state.user_service.update_user(&id, update).await?;
    Ok(Json(user.into()))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.user_service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
