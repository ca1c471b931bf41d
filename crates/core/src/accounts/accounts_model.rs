//! Brokerage account domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a brokerage account. Only ACTIVE accounts can trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
    Closed,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Suspended => "SUSPENDED",
            AccountStatus::Closed => "CLOSED",
        }
    }

    pub fn parse(s: &str) -> AccountStatus {
        match s {
            "SUSPENDED" => AccountStatus::Suspended,
            "CLOSED" => AccountStatus::Closed,
            _ => AccountStatus::Active,
        }
    }
}

/// Domain model for a cash brokerage account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerageAccount {
    pub id: String,
    pub user_id: String,
    pub balance: Decimal,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for opening a brokerage account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrokerageAccount {
    pub id: Option<String>,
    pub user_id: String,
    pub balance: Option<Decimal>,
    pub status: Option<AccountStatus>,
}
