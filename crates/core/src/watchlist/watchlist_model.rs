//! Watchlist domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A symbol a user keeps an eye on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub added_at: DateTime<Utc>,
}

/// Input model for adding a symbol to the watchlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWatchlistItem {
    pub symbol: String,
}

/// Watchlist item decorated with its current price, the API shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedWatchlistItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub added_at: DateTime<Utc>,
}
