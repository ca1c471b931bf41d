//! SQLite storage implementation for watchlists.

mod model;
mod repository;

pub use model::WatchlistItemDB;
pub use repository::WatchlistRepository;
