//! Database model for trade orders.

use diesel::prelude::*;

use tradeshift_core::errors::Result;
use tradeshift_core::trading::{NewTradeOrder, OrderStatus, OrderType, Side, TradeOrder};

use crate::text::{format_datetime, parse_datetime, parse_decimal};

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::trade_orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeOrderDB {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    pub symbol: String,
    pub side: String,
    pub quantity: String,
    pub price: String,
    pub order_type: String,
    pub status: String,
    pub created_at: String,
    pub filled_at: Option<String>,
}

impl TradeOrderDB {
    pub fn into_domain(self) -> Result<TradeOrder> {
        let quantity = parse_decimal("trade_orders.quantity", &self.quantity)?;
        let price = parse_decimal("trade_orders.price", &self.price)?;
        let created_at = parse_datetime("trade_orders.created_at", &self.created_at)?;
        let filled_at = self
            .filled_at
            .as_deref()
            .map(|v| parse_datetime("trade_orders.filled_at", v))
            .transpose()?;
        Ok(TradeOrder {
            id: self.id,
            user_id: self.user_id,
            account_id: self.account_id,
            symbol: self.symbol,
            side: Side::parse(&self.side),
            quantity,
            price,
            order_type: OrderType::parse(&self.order_type),
            status: OrderStatus::parse(&self.status),
            created_at,
            filled_at,
        })
    }
}

impl From<NewTradeOrder> for TradeOrderDB {
    fn from(domain: NewTradeOrder) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: domain.user_id,
            account_id: domain.account_id,
            symbol: domain.symbol,
            side: domain.side.as_str().to_string(),
            quantity: domain.quantity.to_string(),
            price: domain.price.to_string(),
            order_type: domain.order_type.as_str().to_string(),
            status: domain.status.as_str().to_string(),
            created_at: format_datetime(&chrono::Utc::now()),
            filled_at: None,
        }
    }
}
