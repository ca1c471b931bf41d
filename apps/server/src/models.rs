//! Request and response shapes shared across API modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradeshift_core::users::{Role, User};

/// Login payload. The front end also sends the selected role; the server
/// authenticates by email and password and ignores the claimed role.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// User shape returned by the API. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub contact_no: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            contact_no: user.contact_no,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

/// Partial user update. Absent fields are left untouched; a password, when
/// present, is re-hashed before storage.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub contact_no: Option<String>,
    pub role: Option<Role>,
}
