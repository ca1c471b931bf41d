use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use rand::rngs::OsRng;

use tradeshift_core::accounts::NewBrokerageAccount;
use tradeshift_core::constants::DEFAULT_PORTFOLIO_NAME;
use tradeshift_core::portfolio::NewPortfolio;
use tradeshift_core::users::NewUser;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{AuthResponse, LoginRequest, RegisterRequest},
};

pub(crate) fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        })
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

fn validate_registration(body: &RegisterRequest) -> Result<(), ApiError> {
    if body.name.trim().is_empty()
        || body.username.trim().is_empty()
        || body.email.trim().is_empty()
        || body.password.is_empty()
    {
        return Err(ApiError::bad_request("Please fill all required fields"));
    }
    if !body.email.contains('@') {
        return Err(ApiError::bad_request("Please enter a valid email address"));
    }
    if body.password.len() < 6 {
        return Err(ApiError::bad_request(
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

/// Registers a user and provisions their starting setup: a funded ACTIVE
/// brokerage account and an empty default portfolio.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    validate_registration(&body)?;

    let password_hash = hash_password(&body.password)?;
    let user = state
        .user_service
        .register_user(NewUser {
            id: None,
            username: body.username,
            name: body.name,
            email: body.email,
            password_hash,
            contact_no: body.contact_no,
            role: body.role,
        })
        .await?;

    state
        .account_service
        .open_account(NewBrokerageAccount {
            id: None,
            user_id: user.id.clone(),
            balance: None,
            status: None,
        })
        .await?;

    state
        .portfolio_service
        .create_portfolio(
            &user.id,
            NewPortfolio {
                id: None,
                name: DEFAULT_PORTFOLIO_NAME.to_string(),
                assets: Vec::new(),
            },
        )
        .await?;

    let token = state
        .auth
        .issue_token(&user.id, &user.username, user.role)?;

    tracing::info!("Registered user {}", user.username);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// Authenticates by email and password. The role the client sends along is
/// ignored; the stored role is authoritative. Every failure mode returns the
/// same 401 so the response does not reveal which part was wrong.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let email = body.email.trim().to_lowercase();

    let user = state
        .user_service
        .get_user_by_email(&email)?
        .filter(|u| verify_password(&body.password, &u.password_hash))
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let token = state
        .auth
        .issue_token(&user.id, &user.username, user.role)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}
