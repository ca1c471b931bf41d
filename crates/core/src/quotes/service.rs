use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::debug;
use rust_decimal::Decimal;

use super::model::Quote;
use super::store::{QuoteServiceTrait, QuoteStoreTrait};
use super::symbols;
use crate::constants::QUOTE_CACHE_TTL_SECS;
use crate::errors::{Error, Result};

/// Service producing mock market prices.
pub struct QuoteService {
    store: Arc<dyn QuoteStoreTrait>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStoreTrait>) -> Self {
        Self { store }
    }
}

/// Price for a symbol outside the fixed table: derived from the symbol's
/// Java-style string hash so repeated lookups agree. The dollar part lands
/// in [50, 1049] and the cents come from the same hash.
fn fallback_price(symbol: &str) -> Decimal {
    let hash = symbol
        .chars()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32));
    let dollars = hash.unsigned_abs() % 1000 + 50;
    let cents = hash.unsigned_abs() % 100;
    Decimal::new((dollars * 100 + cents) as i64, 2)
}

pub(crate) fn price_for_symbol(symbol: &str) -> Decimal {
    symbols::table_price(symbol).unwrap_or_else(|| fallback_price(symbol))
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(Error::invalid_input("Symbol must not be empty"));
        }

        if let Some(cached) = self.store.latest_for_symbol(&symbol)? {
            if Utc::now() - cached.fetched_at < Duration::seconds(QUOTE_CACHE_TTL_SECS) {
                return Ok(cached);
            }
        }

        let quote = Quote {
            price: price_for_symbol(&symbol),
            symbol,
            fetched_at: Utc::now(),
        };
        debug!("Fetched quote {} = {}", quote.symbol, quote.price);
        self.store.insert(quote.clone()).await?;
        Ok(quote)
    }
}
