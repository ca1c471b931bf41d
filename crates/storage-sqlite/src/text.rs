//! Conversions between SQLite TEXT columns and domain types.
//!
//! Decimals and timestamps are stored as strings (decimal notation and
//! RFC 3339 respectively). Corrupt values surface as database errors
//! instead of panicking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use tradeshift_core::errors::{DatabaseError, Error, Result};

pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|e| {
        Error::Database(DatabaseError::Internal(format!(
            "Invalid decimal in column '{}': '{}' ({})",
            field, value, e
        )))
    })
}

pub fn parse_datetime(field: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            Error::Database(DatabaseError::Internal(format!(
                "Invalid timestamp in column '{}': '{}' ({})",
                field, value, e
            )))
        })
}

pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_decimal_text() {
        assert_eq!(parse_decimal("balance", "10000.00").unwrap(), dec!(10000));
        assert!(parse_decimal("balance", "ten").is_err());
    }

    #[test]
    fn datetime_round_trips() {
        let now = Utc::now();
        let text = format_datetime(&now);
        assert_eq!(parse_datetime("created_at", &text).unwrap(), now);
    }
}
