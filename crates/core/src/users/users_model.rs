//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user account.
///
/// The legacy front end sent both `USER`/`ADMIN` and the Spring-style
/// `ROLE_USER`/`ROLE_ADMIN` spellings; both deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    #[serde(alias = "ROLE_USER")]
    User,
    #[serde(alias = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parses a stored role string, defaulting to `User` for anything
    /// unrecognized (mirrors the original backend's default).
    pub fn parse(s: &str) -> Role {
        match s {
            "ADMIN" | "ROLE_ADMIN" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// Domain model representing a registered user.
///
/// `password_hash` never crosses the API boundary; the server layer maps
/// this model to a DTO without it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub contact_no: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Option<String>,
    pub username: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub contact_no: Option<String>,
    pub role: Option<Role>,
}

/// Partial update for a user. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub contact_no: Option<String>,
    pub role: Option<Role>,
}

impl UserUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.contact_no.is_none()
            && self.role.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_screaming_snake() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }

    #[test]
    fn role_deserializes_legacy_spring_aliases() {
        assert_eq!(
            serde_json::from_str::<Role>("\"ROLE_ADMIN\"").unwrap(),
            Role::Admin
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"ROLE_USER\"").unwrap(),
            Role::User
        );
        assert_eq!(serde_json::from_str::<Role>("\"ADMIN\"").unwrap(), Role::Admin);
    }

    #[test]
    fn role_parse_defaults_to_user() {
        assert_eq!(Role::parse("SOMETHING_ELSE"), Role::User);
        assert_eq!(Role::parse("ROLE_ADMIN"), Role::Admin);
    }
}
