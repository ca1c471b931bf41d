//! SQLite storage implementation for brokerage accounts.

mod model;
mod repository;

pub use model::BrokerageAccountDB;
pub use repository::BrokerageAccountRepository;
