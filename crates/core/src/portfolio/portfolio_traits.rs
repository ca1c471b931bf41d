use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::portfolio_model::{
    NewAsset, NewPortfolio, PortfolioSummary, PortfolioWithAssets,
};

/// Trait for portfolio repository operations.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    fn get_by_id(&self, portfolio_id: &str) -> Result<PortfolioWithAssets>;
    fn list_for_owner(&self, owner_id: &str) -> Result<Vec<PortfolioWithAssets>>;
    async fn insert(&self, owner_id: &str, new_portfolio: NewPortfolio)
        -> Result<PortfolioWithAssets>;
    async fn insert_asset(&self, portfolio_id: &str, asset: NewAsset)
        -> Result<PortfolioWithAssets>;
}

/// Trait for portfolio service operations. Ownership is enforced here:
/// acting on another user's portfolio surfaces as NotFound.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    fn list_for_owner(&self, owner_id: &str) -> Result<Vec<PortfolioWithAssets>>;
    fn get_for_owner(&self, owner_id: &str, portfolio_id: &str) -> Result<PortfolioWithAssets>;
    fn summary_for_owner(&self, owner_id: &str, portfolio_id: &str) -> Result<PortfolioSummary>;
    async fn create_portfolio(
        &self,
        owner_id: &str,
        new_portfolio: NewPortfolio,
    ) -> Result<PortfolioWithAssets>;
    async fn add_asset(
        &self,
        owner_id: &str,
        portfolio_id: &str,
        asset: NewAsset,
    ) -> Result<PortfolioWithAssets>;
}
