use async_trait::async_trait;

use crate::errors::Result;
use crate::watchlist::watchlist_model::{QuotedWatchlistItem, WatchlistItem};

/// Trait for watchlist repository operations.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    fn get_by_id(&self, item_id: &str) -> Result<WatchlistItem>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<WatchlistItem>>;
    fn find_symbol(&self, user_id: &str, symbol: &str) -> Result<Option<WatchlistItem>>;
    async fn insert(&self, user_id: &str, symbol: &str, name: &str) -> Result<WatchlistItem>;
    async fn delete(&self, item_id: &str) -> Result<usize>;
}

/// Trait for watchlist service operations.
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    async fn list_with_quotes(&self, user_id: &str) -> Result<Vec<QuotedWatchlistItem>>;
    async fn add_symbol(&self, user_id: &str, symbol: &str) -> Result<WatchlistItem>;
    async fn remove(&self, user_id: &str, item_id: &str) -> Result<()>;
}
