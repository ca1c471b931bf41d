//! Market quotes module.
//!
//! Prices come from a fixed symbol table (the values the trading screen
//! shipped with) with a deterministic hash-derived fallback for unknown
//! symbols. Fetched quotes are cached through the store trait.

mod model;
mod service;
mod store;
mod symbols;

pub use model::Quote;
pub use service::QuoteService;
pub use store::{QuoteServiceTrait, QuoteStoreTrait};
pub use symbols::display_name;
