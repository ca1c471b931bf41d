//! Database model for users.

use diesel::prelude::*;

use tradeshift_core::errors::Result;
use tradeshift_core::users::{NewUser, Role, User};

use crate::text::{format_datetime, parse_datetime};

/// Database model for users. Timestamps are stored as RFC 3339 text.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub contact_no: Option<String>,
    pub role: String,
    pub created_at: String,
}

impl UserDB {
    pub fn into_domain(self) -> Result<User> {
        let created_at = parse_datetime("users.created_at", &self.created_at)?;
        Ok(User {
            id: self.id,
            username: self.username,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            contact_no: self.contact_no,
            role: Role::parse(&self.role),
            created_at,
        })
    }
}

impl From<NewUser> for UserDB {
    fn from(domain: NewUser) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            username: domain.username,
            name: domain.name,
            email: domain.email,
            password_hash: domain.password_hash,
            contact_no: domain.contact_no,
            role: domain.role.unwrap_or_default().as_str().to_string(),
            created_at: format_datetime(&chrono::Utc::now()),
        }
    }
}
