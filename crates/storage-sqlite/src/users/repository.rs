use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use tradeshift_core::errors::Result;
use tradeshift_core::users::{NewUser, User, UserRepositoryTrait, UserUpdate};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;
use crate::schema::users::dsl::*;

use super::model::UserDB;

/// Repository for managing user records in the database.
pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let row = users
            .select(UserDB::as_select())
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .into_core()?;

        row.into_domain()
    }

    fn find_by_email(&self, email_param: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let row = users
            .select(UserDB::as_select())
            .filter(email.eq(email_param))
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;

        row.map(UserDB::into_domain).transpose()
    }

    fn find_by_username(&self, username_param: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let row = users
            .select(UserDB::as_select())
            .filter(username.eq(username_param))
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;

        row.map(UserDB::into_domain).transpose()
    }

    fn list(&self) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = users
            .select(UserDB::as_select())
            .order(created_at.asc())
            .load::<UserDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(UserDB::into_domain).collect()
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let mut row: UserDB = new_user.into();
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(users::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                row.into_domain()
            })
            .await
    }

    async fn update(&self, user_id: &str, update: UserUpdate) -> Result<User> {
        let id_owned = user_id.to_string();
        self.writer
            .exec(move |conn| {
                let existing = users
                    .select(UserDB::as_select())
                    .find(&id_owned)
                    .first::<UserDB>(conn)
                    .into_core()?;

                let row = UserDB {
                    id: existing.id,
                    username: update.username.unwrap_or(existing.username),
                    name: update.name.unwrap_or(existing.name),
                    email: update.email.unwrap_or(existing.email),
                    password_hash: update.password_hash.unwrap_or(existing.password_hash),
                    contact_no: update.contact_no.or(existing.contact_no),
                    role: update
                        .role
                        .map(|r| r.as_str().to_string())
                        .unwrap_or(existing.role),
                    created_at: existing.created_at,
                };

                diesel::update(users.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                row.into_domain()
            })
            .await
    }

    async fn delete(&self, user_id: &str) -> Result<usize> {
        let id_owned = user_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(users.find(id_owned))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
