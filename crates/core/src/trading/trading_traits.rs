use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::trading::trading_model::{NewTradeOrder, OrderStatus, PlaceOrder, TradeOrder};

/// Trait for trade order repository operations.
#[async_trait]
pub trait TradeOrderRepositoryTrait: Send + Sync {
    fn get_by_id(&self, order_id: &str) -> Result<TradeOrder>;

    /// Orders for a user, newest first, optionally capped.
    fn list_for_user(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<TradeOrder>>;

    async fn insert(&self, order: NewTradeOrder) -> Result<TradeOrder>;
    async fn update_status(
        &self,
        order_id: &str,
        status: OrderStatus,
        filled_at: Option<DateTime<Utc>>,
    ) -> Result<TradeOrder>;
}

/// Trait for trade service operations.
#[async_trait]
pub trait TradeServiceTrait: Send + Sync {
    /// Places an order for the user and runs the mock broker execution.
    async fn place_order(&self, user_id: &str, order: PlaceOrder) -> Result<TradeOrder>;

    fn get_order(&self, order_id: &str) -> Result<TradeOrder>;
    fn list_for_user(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<TradeOrder>>;

    /// PENDING -> CANCELLED; any other transition is a constraint violation.
    async fn cancel_order(&self, user_id: &str, order_id: &str) -> Result<TradeOrder>;
}
