use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use tradeshift_core::errors::Result;
use tradeshift_core::watchlist::{WatchlistItem, WatchlistRepositoryTrait};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::watchlist_items;
use crate::schema::watchlist_items::dsl::*;
use crate::text::format_datetime;

use super::model::WatchlistItemDB;

/// Repository for managing watchlist records in the database.
pub struct WatchlistRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WatchlistRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for WatchlistRepository {
    fn get_by_id(&self, item_id: &str) -> Result<WatchlistItem> {
        let mut conn = get_connection(&self.pool)?;

        let row = watchlist_items
            .select(WatchlistItemDB::as_select())
            .find(item_id)
            .first::<WatchlistItemDB>(&mut conn)
            .into_core()?;

        row.into_domain()
    }

    fn list_for_user(&self, user_id_param: &str) -> Result<Vec<WatchlistItem>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = watchlist_items
            .select(WatchlistItemDB::as_select())
            .filter(user_id.eq(user_id_param))
            .order(added_at.asc())
            .load::<WatchlistItemDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(WatchlistItemDB::into_domain).collect()
    }

    fn find_symbol(&self, user_id_param: &str, symbol_param: &str) -> Result<Option<WatchlistItem>> {
        let mut conn = get_connection(&self.pool)?;

        let row = watchlist_items
            .select(WatchlistItemDB::as_select())
            .filter(user_id.eq(user_id_param))
            .filter(symbol.eq(symbol_param))
            .first::<WatchlistItemDB>(&mut conn)
            .optional()
            .into_core()?;

        row.map(WatchlistItemDB::into_domain).transpose()
    }

    async fn insert(
        &self,
        user_id_param: &str,
        symbol_param: &str,
        name_param: &str,
    ) -> Result<WatchlistItem> {
        let row = WatchlistItemDB {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id_param.to_string(),
            symbol: symbol_param.to_string(),
            name: name_param.to_string(),
            added_at: format_datetime(&chrono::Utc::now()),
        };
        self.writer
            .exec(move |conn| {
                diesel::insert_into(watchlist_items::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                row.into_domain()
            })
            .await
    }

    async fn delete(&self, item_id: &str) -> Result<usize> {
        let id_owned = item_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(watchlist_items.find(id_owned))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
