use async_trait::async_trait;

use crate::errors::Result;
use crate::quotes::model::Quote;

/// Persistence for fetched quotes (the `market_prices` cache table).
#[async_trait]
pub trait QuoteStoreTrait: Send + Sync {
    /// Most recently fetched quote for a symbol, if any.
    fn latest_for_symbol(&self, symbol: &str) -> Result<Option<Quote>>;
    async fn insert(&self, quote: Quote) -> Result<Quote>;
}

/// Trait for quote service operations.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Current price for a symbol (upper-cased), served from the cache
    /// when fresh.
    async fn get_quote(&self, symbol: &str) -> Result<Quote>;
}
