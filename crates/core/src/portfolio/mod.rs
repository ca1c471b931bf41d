//! Portfolio module - portfolios, assets, and holdings valuation.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_model::{
    Asset, AssetType, AssetValuation, NewAsset, NewPortfolio, Portfolio, PortfolioSummary,
    PortfolioWithAssets,
};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
