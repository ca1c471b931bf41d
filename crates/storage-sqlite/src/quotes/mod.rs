//! SQLite storage implementation for the quote cache.

mod model;
mod repository;

pub use model::MarketPriceDB;
pub use repository::QuoteStore;
