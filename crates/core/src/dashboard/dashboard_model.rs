//! Dashboard domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::trading::TradeOrder;

/// One of the largest positions across all of a user's portfolios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopAsset {
    pub symbol: String,
    pub current_value: Decimal,
    pub gain_loss_percent: Decimal,
}

/// Everything the dashboard page shows, computed from stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_portfolio_value: Decimal,
    pub total_gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
    pub cash_balance: Decimal,
    pub recent_orders: Vec<TradeOrder>,
    pub top_assets: Vec<TopAsset>,
}
