use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use tradeshift_core::errors::Result;
use tradeshift_core::quotes::{Quote, QuoteStoreTrait};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::market_prices;
use crate::schema::market_prices::dsl::*;

use super::model::MarketPriceDB;

/// Persists fetched quotes in the `market_prices` cache table.
pub struct QuoteStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl QuoteStoreTrait for QuoteStore {
    fn latest_for_symbol(&self, symbol_param: &str) -> Result<Option<Quote>> {
        let mut conn = get_connection(&self.pool)?;

        let row = market_prices
            .select(MarketPriceDB::as_select())
            .filter(symbol.eq(symbol_param))
            .order(fetched_at.desc())
            .first::<MarketPriceDB>(&mut conn)
            .optional()
            .into_core()?;

        row.map(MarketPriceDB::into_domain).transpose()
    }

    async fn insert(&self, quote: Quote) -> Result<Quote> {
        self.writer
            .exec(move |conn| {
                let row: MarketPriceDB = quote.into();

                diesel::insert_into(market_prices::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                row.into_domain()
            })
            .await
    }
}
