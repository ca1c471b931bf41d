//! SQLite storage implementation for portfolios and their holdings.

mod model;
mod repository;

pub use model::{AssetDB, PortfolioDB};
pub use repository::PortfolioRepository;
