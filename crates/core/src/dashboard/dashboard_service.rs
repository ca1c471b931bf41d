use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::dashboard_model::{DashboardSummary, TopAsset};
use crate::accounts::{AccountStatus, BrokerageAccountServiceTrait};
use crate::constants::{MONEY_SCALE, RECENT_ORDERS_LIMIT, TOP_ASSETS_LIMIT, VALUATION_MARKUP};
use crate::errors::Result;
use crate::portfolio::PortfolioServiceTrait;
use crate::trading::TradeServiceTrait;

/// Trait for the dashboard aggregation.
pub trait DashboardServiceTrait: Send + Sync {
    fn summary_for_user(&self, user_id: &str) -> Result<DashboardSummary>;
}

/// Composes portfolio, trading, and account data into the dashboard view.
pub struct DashboardService {
    portfolio_service: Arc<dyn PortfolioServiceTrait>,
    trade_service: Arc<dyn TradeServiceTrait>,
    account_service: Arc<dyn BrokerageAccountServiceTrait>,
}

impl DashboardService {
    pub fn new(
        portfolio_service: Arc<dyn PortfolioServiceTrait>,
        trade_service: Arc<dyn TradeServiceTrait>,
        account_service: Arc<dyn BrokerageAccountServiceTrait>,
    ) -> Self {
        Self {
            portfolio_service,
            trade_service,
            account_service,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn summary_for_user(&self, user_id: &str) -> Result<DashboardSummary> {
        let portfolios = self.portfolio_service.list_for_owner(user_id)?;

        let mut total_cost = Decimal::ZERO;
        // Positions aggregated by symbol across portfolios.
        let mut by_symbol: HashMap<String, Decimal> = HashMap::new();
        for p in &portfolios {
            for asset in &p.assets {
                let cost = (asset.quantity * asset.avg_price).round_dp(MONEY_SCALE);
                total_cost += cost;
                let value = (cost * VALUATION_MARKUP).round_dp(MONEY_SCALE);
                *by_symbol.entry(asset.symbol.clone()).or_default() += value;
            }
        }
        let total_value: Decimal = by_symbol.values().copied().sum();
        let total_gain_loss = total_value - total_cost;
        let gain_loss_percent = if total_cost.is_zero() {
            Decimal::ZERO
        } else {
            (total_gain_loss / total_cost * Decimal::ONE_HUNDRED).round_dp(MONEY_SCALE)
        };

        let mut top_assets: Vec<TopAsset> = by_symbol
            .into_iter()
            .map(|(symbol, current_value)| TopAsset {
                symbol,
                current_value,
                // Uniform markup means a uniform per-position percentage.
                gain_loss_percent,
            })
            .collect();
        top_assets.sort_by(|a, b| b.current_value.cmp(&a.current_value));
        top_assets.truncate(TOP_ASSETS_LIMIT);

        let cash_balance = self
            .account_service
            .list_for_user(user_id)?
            .iter()
            .filter(|a| a.status == AccountStatus::Active)
            .map(|a| a.balance)
            .sum();

        let recent_orders = self
            .trade_service
            .list_for_user(user_id, Some(RECENT_ORDERS_LIMIT))?;

        Ok(DashboardSummary {
            total_portfolio_value: total_value,
            total_gain_loss,
            gain_loss_percent,
            cash_balance,
            recent_orders,
            top_assets,
        })
    }
}
