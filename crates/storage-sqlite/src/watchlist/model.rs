//! Database model for watchlist items.

use diesel::prelude::*;

use tradeshift_core::errors::Result;
use tradeshift_core::watchlist::WatchlistItem;

use crate::text::parse_datetime;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::watchlist_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WatchlistItemDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub added_at: String,
}

impl WatchlistItemDB {
    pub fn into_domain(self) -> Result<WatchlistItem> {
        let added_at = parse_datetime("watchlist_items.added_at", &self.added_at)?;
        Ok(WatchlistItem {
            id: self.id,
            user_id: self.user_id,
            symbol: self.symbol,
            name: self.name,
            added_at,
        })
    }
}
