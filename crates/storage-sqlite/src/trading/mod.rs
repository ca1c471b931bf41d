//! SQLite storage implementation for trade orders.

mod model;
mod repository;

pub use model::TradeOrderDB;
pub use repository::TradeOrderRepository;
