//! Watchlist module - tracked symbols decorated with current quotes.

mod watchlist_model;
mod watchlist_service;
mod watchlist_traits;

pub use watchlist_model::{NewWatchlistItem, QuotedWatchlistItem, WatchlistItem};
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
