use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::trading_model::{NewTradeOrder, OrderStatus, OrderType, PlaceOrder, Side, TradeOrder};
use super::trading_traits::{TradeOrderRepositoryTrait, TradeServiceTrait};
use crate::accounts::BrokerageAccountServiceTrait;
use crate::constants::MONEY_SCALE;
use crate::errors::{Error, Result};
use crate::quotes::QuoteServiceTrait;

/// Service for placing and querying trade orders.
///
/// Execution is a mock broker: every accepted order fills immediately at its
/// resolved price. BUY debits the account before the order is stored, so a
/// failed funds check leaves no trace; SELL credits the proceeds on fill, and
/// a credit that cannot be applied rejects the order.
pub struct TradeService {
    repository: Arc<dyn TradeOrderRepositoryTrait>,
    account_service: Arc<dyn BrokerageAccountServiceTrait>,
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl TradeService {
    pub fn new(
        repository: Arc<dyn TradeOrderRepositoryTrait>,
        account_service: Arc<dyn BrokerageAccountServiceTrait>,
        quote_service: Arc<dyn QuoteServiceTrait>,
    ) -> Self {
        Self {
            repository,
            account_service,
            quote_service,
        }
    }

    async fn resolve_price(&self, order: &PlaceOrder, symbol: &str) -> Result<Decimal> {
        match order.order_type {
            OrderType::Limit => {
                let price = order
                    .price
                    .ok_or_else(|| Error::invalid_input("Price is required for LIMIT orders"))?;
                if price <= Decimal::ZERO {
                    return Err(Error::invalid_input("Please fill all required fields"));
                }
                Ok(price)
            }
            OrderType::Market => Ok(self.quote_service.get_quote(symbol).await?.price),
        }
    }
}

#[async_trait]
impl TradeServiceTrait for TradeService {
    async fn place_order(&self, user_id: &str, order: PlaceOrder) -> Result<TradeOrder> {
        let symbol = order.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(Error::invalid_input("Please fill all required fields"));
        }
        if order.quantity <= Decimal::ZERO {
            return Err(Error::invalid_input("Please enter a valid quantity"));
        }

        let price = self.resolve_price(&order, &symbol).await?;
        let account = match &order.account_id {
            Some(id) => {
                let account = self.account_service.get_account(id)?;
                if account.user_id != user_id {
                    return Err(Error::not_found(format!("Account not found: {id}")));
                }
                account
            }
            None => self.account_service.default_for_user(user_id)?,
        };

        let total = (order.quantity * price).round_dp(MONEY_SCALE);

        // Funds are checked and taken before the order exists, so a rejected
        // BUY leaves both the order book and the balance untouched.
        if order.side == Side::Buy {
            self.account_service.debit(&account.id, total).await?;
        }

        let stored = self
            .repository
            .insert(NewTradeOrder {
                id: None,
                user_id: user_id.to_string(),
                account_id: account.id.clone(),
                symbol: symbol.clone(),
                side: order.side,
                quantity: order.quantity,
                price,
                order_type: order.order_type,
                status: OrderStatus::Pending,
            })
            .await?;

        // Mock broker execution: accept everything, fill immediately.
        let filled = self
            .repository
            .update_status(&stored.id, OrderStatus::Filled, Some(Utc::now()))
            .await?;

        // A SELL whose proceeds cannot be credited must not read as executed:
        // the fill is rolled back to REJECTED and the failure surfaces.
        if order.side == Side::Sell {
            if let Err(credit_err) = self.account_service.credit(&account.id, total).await {
                warn!(
                    "Failed to credit proceeds for order {}: {credit_err}",
                    filled.id
                );
                if let Err(e) = self
                    .repository
                    .update_status(&filled.id, OrderStatus::Rejected, None)
                    .await
                {
                    warn!("Failed to mark order {} REJECTED: {e}", filled.id);
                }
                return Err(credit_err);
            }
        }

        debug!(
            "Order {} {} {} x {} @ {} filled",
            filled.id,
            filled.side.as_str(),
            filled.quantity,
            filled.symbol,
            filled.price
        );
        Ok(filled)
    }

    fn get_order(&self, order_id: &str) -> Result<TradeOrder> {
        self.repository.get_by_id(order_id)
    }

    fn list_for_user(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<TradeOrder>> {
        self.repository.list_for_user(user_id, limit)
    }

    async fn cancel_order(&self, user_id: &str, order_id: &str) -> Result<TradeOrder> {
        let order = self.repository.get_by_id(order_id)?;
        if order.user_id != user_id {
            return Err(Error::not_found(format!("Order not found: {order_id}")));
        }
        if order.status != OrderStatus::Pending {
            return Err(Error::ConstraintViolation(format!(
                "Only PENDING orders can be cancelled (order is {})",
                order.status.as_str()
            )));
        }
        self.repository
            .update_status(order_id, OrderStatus::Cancelled, None)
            .await
    }
}
