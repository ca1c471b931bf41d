//! Application-wide constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places used for money amounts on the wire and in storage.
pub const MONEY_SCALE: u32 = 2;

/// Fixed markup the source system applies to purchase cost when valuing
/// holdings ("current price = avg price x 1.05"). Stands in for market data.
pub const VALUATION_MARKUP: Decimal = dec!(1.05);

/// Cash balance of the brokerage account provisioned at registration.
pub const STARTING_CASH_BALANCE: Decimal = dec!(10000);

/// Name of the portfolio provisioned at registration.
pub const DEFAULT_PORTFOLIO_NAME: &str = "Main Portfolio";

/// How long a cached market price is served before being refreshed.
pub const QUOTE_CACHE_TTL_SECS: i64 = 60;

/// Number of orders shown in the "recent orders" strip.
pub const RECENT_ORDERS_LIMIT: i64 = 5;

/// Number of positions shown in the dashboard "top assets" list.
pub const TOP_ASSETS_LIMIT: usize = 5;
