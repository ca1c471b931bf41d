//! Database model for cached market prices.

use diesel::prelude::*;

use tradeshift_core::errors::Result;
use tradeshift_core::quotes::Quote;

use crate::text::{format_datetime, parse_datetime, parse_decimal};

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::market_prices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarketPriceDB {
    pub id: String,
    pub symbol: String,
    pub price: String,
    pub fetched_at: String,
}

impl MarketPriceDB {
    pub fn into_domain(self) -> Result<Quote> {
        let price = parse_decimal("market_prices.price", &self.price)?;
        let fetched_at = parse_datetime("market_prices.fetched_at", &self.fetched_at)?;
        Ok(Quote {
            symbol: self.symbol,
            price,
            fetched_at,
        })
    }
}

impl From<Quote> for MarketPriceDB {
    fn from(domain: Quote) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: domain.symbol,
            price: domain.price.to_string(),
            fetched_at: format_datetime(&domain.fetched_at),
        }
    }
}
