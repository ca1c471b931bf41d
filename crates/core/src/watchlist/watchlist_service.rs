use std::sync::Arc;

use async_trait::async_trait;

use super::watchlist_model::{QuotedWatchlistItem, WatchlistItem};
use super::watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::errors::{Error, Result};
use crate::quotes::{display_name, QuoteServiceTrait};

/// Service for managing per-user watchlists.
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl WatchlistService {
    pub fn new(
        repository: Arc<dyn WatchlistRepositoryTrait>,
        quote_service: Arc<dyn QuoteServiceTrait>,
    ) -> Self {
        Self {
            repository,
            quote_service,
        }
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    async fn list_with_quotes(&self, user_id: &str) -> Result<Vec<QuotedWatchlistItem>> {
        let items = self.repository.list_for_user(user_id)?;
        let mut quoted = Vec::with_capacity(items.len());
        for item in items {
            let quote = self.quote_service.get_quote(&item.symbol).await?;
            quoted.push(QuotedWatchlistItem {
                id: item.id,
                symbol: item.symbol,
                name: item.name,
                price: quote.price,
                added_at: item.added_at,
            });
        }
        Ok(quoted)
    }

    async fn add_symbol(&self, user_id: &str, symbol: &str) -> Result<WatchlistItem> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(Error::invalid_input("Symbol must not be empty"));
        }
        if self.repository.find_symbol(user_id, &symbol)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "{symbol} is already on the watchlist"
            )));
        }
        let name = display_name(&symbol)
            .map(str::to_string)
            .unwrap_or_else(|| symbol.clone());
        self.repository.insert(user_id, &symbol, &name).await
    }

    async fn remove(&self, user_id: &str, item_id: &str) -> Result<()> {
        let item = self.repository.get_by_id(item_id)?;
        if item.user_id != user_id {
            return Err(Error::not_found(format!(
                "Watchlist item not found: {item_id}"
            )));
        }
        self.repository.delete(item_id).await?;
        Ok(())
    }
}
