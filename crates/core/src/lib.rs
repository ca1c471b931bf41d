//! TradeShift Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for TradeShift.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod portfolio;
pub mod quotes;
pub mod trading;
pub mod users;
pub mod watchlist;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
