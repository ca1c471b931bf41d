//! Portfolio and asset domain models, plus the fixed-markup valuation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MONEY_SCALE, VALUATION_MARKUP};

/// Classification of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    #[default]
    Stock,
    Etf,
    Crypto,
    Bond,
    MutualFund,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "STOCK",
            AssetType::Etf => "ETF",
            AssetType::Crypto => "CRYPTO",
            AssetType::Bond => "BOND",
            AssetType::MutualFund => "MUTUAL_FUND",
        }
    }

    pub fn parse(s: &str) -> AssetType {
        match s {
            "ETF" => AssetType::Etf,
            "CRYPTO" => AssetType::Crypto,
            "BOND" => AssetType::Bond,
            "MUTUAL_FUND" => AssetType::MutualFund,
            _ => AssetType::Stock,
        }
    }
}

/// Domain model representing a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

/// A holding inside a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub asset_type: AssetType,
    pub quantity: Decimal,
    pub avg_price: Decimal,
}

/// Input model for a new holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub symbol: String,
    #[serde(default)]
    pub asset_type: AssetType,
    pub quantity: Decimal,
    pub avg_price: Decimal,
}

/// Input model for creating a portfolio, optionally with initial holdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub assets: Vec<NewAsset>,
}

/// A portfolio together with its holdings, the shape the API returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioWithAssets {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub assets: Vec<Asset>,
}

/// Valuation of a single holding under the fixed markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuation {
    pub symbol: String,
    pub asset_type: AssetType,
    pub quantity: Decimal,
    pub avg_price: Decimal,
    pub cost: Decimal,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
}

/// Valuation of a whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub portfolio_id: String,
    pub name: String,
    pub total_cost: Decimal,
    pub total_value: Decimal,
    pub total_gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
    pub positions: Vec<AssetValuation>,
}

/// Purchase cost of a holding.
pub fn asset_cost(asset: &Asset) -> Decimal {
    (asset.quantity * asset.avg_price).round_dp(MONEY_SCALE)
}

/// Current value under the source system's fixed 5% markup.
pub fn asset_current_value(asset: &Asset) -> Decimal {
    (asset.quantity * asset.avg_price * VALUATION_MARKUP).round_dp(MONEY_SCALE)
}

/// Full valuation for a holding.
pub fn value_asset(asset: &Asset) -> AssetValuation {
    let cost = asset_cost(asset);
    let current_value = asset_current_value(asset);
    let gain_loss = current_value - cost;
    let gain_loss_percent = if cost.is_zero() {
        Decimal::ZERO
    } else {
        (gain_loss / cost * Decimal::ONE_HUNDRED).round_dp(MONEY_SCALE)
    };
    AssetValuation {
        symbol: asset.symbol.clone(),
        asset_type: asset.asset_type,
        quantity: asset.quantity,
        avg_price: asset.avg_price,
        cost,
        current_value,
        gain_loss,
        gain_loss_percent,
    }
}
