//! Fixed symbol table carried over from the trading screen's price list.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub(crate) const KNOWN_SYMBOLS: &[(&str, &str, Decimal)] = &[
    ("AAPL", "Apple Inc.", dec!(185.42)),
    ("TSLA", "Tesla Inc.", dec!(245.67)),
    ("GOOGL", "Alphabet Inc.", dec!(138.25)),
    ("MSFT", "Microsoft Corporation", dec!(378.91)),
    ("AMZN", "Amazon.com Inc.", dec!(154.23)),
    ("NVDA", "Nvidia Corporation", dec!(485.76)),
    ("META", "Meta Platforms Inc.", dec!(348.12)),
];

pub(crate) fn table_price(symbol: &str) -> Option<Decimal> {
    KNOWN_SYMBOLS
        .iter()
        .find(|(s, _, _)| *s == symbol)
        .map(|(_, _, price)| *price)
}

/// Display name for a known symbol, used by the watchlist.
pub fn display_name(symbol: &str) -> Option<&'static str> {
    KNOWN_SYMBOLS
        .iter()
        .find(|(s, _, _)| *s == symbol)
        .map(|(_, name, _)| *name)
}
