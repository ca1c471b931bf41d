//! Trading module - order placement, history, and the mock broker fill.

mod trading_model;
mod trading_service;
mod trading_traits;

pub use trading_model::{NewTradeOrder, OrderStatus, OrderType, PlaceOrder, Side, TradeOrder};
pub use trading_service::TradeService;
pub use trading_traits::{TradeOrderRepositoryTrait, TradeServiceTrait};
