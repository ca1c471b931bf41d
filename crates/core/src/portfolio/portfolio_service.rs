use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::portfolio_model::{
    value_asset, NewAsset, NewPortfolio, PortfolioSummary, PortfolioWithAssets,
};
use super::portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::constants::MONEY_SCALE;
use crate::errors::{Error, Result};

/// Service for managing portfolios and their holdings.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn validate_asset(asset: &NewAsset) -> Result<NewAsset> {
        let symbol = asset.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(Error::invalid_input("Please enter a symbol"));
        }
        if asset.quantity <= Decimal::ZERO {
            return Err(Error::invalid_input("Please enter a valid quantity"));
        }
        if asset.avg_price <= Decimal::ZERO {
            return Err(Error::invalid_input("Please enter a valid average price"));
        }
        Ok(NewAsset {
            symbol,
            asset_type: asset.asset_type,
            quantity: asset.quantity,
            avg_price: asset.avg_price,
        })
    }

    /// Loads a portfolio and hides it from non-owners.
    fn owned(&self, owner_id: &str, portfolio_id: &str) -> Result<PortfolioWithAssets> {
        let portfolio = self.repository.get_by_id(portfolio_id)?;
        if portfolio.portfolio.owner_id != owner_id {
            return Err(Error::not_found(format!(
                "Portfolio not found: {portfolio_id}"
            )));
        }
        Ok(portfolio)
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    fn list_for_owner(&self, owner_id: &str) -> Result<Vec<PortfolioWithAssets>> {
        self.repository.list_for_owner(owner_id)
    }

    fn get_for_owner(&self, owner_id: &str, portfolio_id: &str) -> Result<PortfolioWithAssets> {
        self.owned(owner_id, portfolio_id)
    }

    fn summary_for_owner(&self, owner_id: &str, portfolio_id: &str) -> Result<PortfolioSummary> {
        let p = self.owned(owner_id, portfolio_id)?;
        Ok(summarize(&p))
    }

    async fn create_portfolio(
        &self,
        owner_id: &str,
        new_portfolio: NewPortfolio,
    ) -> Result<PortfolioWithAssets> {
        let name = new_portfolio.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::invalid_input("Portfolio name must not be empty"));
        }
        let assets = new_portfolio
            .assets
            .iter()
            .map(Self::validate_asset)
            .collect::<Result<Vec<_>>>()?;
        self.repository
            .insert(
                owner_id,
                NewPortfolio {
                    id: new_portfolio.id,
                    name,
                    assets,
                },
            )
            .await
    }

    async fn add_asset(
        &self,
        owner_id: &str,
        portfolio_id: &str,
        asset: NewAsset,
    ) -> Result<PortfolioWithAssets> {
        self.owned(owner_id, portfolio_id)?;
        let asset = Self::validate_asset(&asset)?;
        self.repository.insert_asset(portfolio_id, asset).await
    }
}

/// Values every position and totals the portfolio.
pub(crate) fn summarize(p: &PortfolioWithAssets) -> PortfolioSummary {
    let positions: Vec<_> = p.assets.iter().map(value_asset).collect();
    let total_cost: Decimal = positions.iter().map(|v| v.cost).sum();
    let total_value: Decimal = positions.iter().map(|v| v.current_value).sum();
    let total_gain_loss = total_value - total_cost;
    let gain_loss_percent = if total_cost.is_zero() {
        Decimal::ZERO
    } else {
        (total_gain_loss / total_cost * Decimal::ONE_HUNDRED).round_dp(MONEY_SCALE)
    };
    PortfolioSummary {
        portfolio_id: p.portfolio.id.clone(),
        name: p.portfolio.name.clone(),
        total_cost,
        total_value,
        total_gain_loss,
        gain_loss_percent,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::portfolio_model::{Asset, AssetType, Portfolio};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPortfolioRepository {
        portfolios: Mutex<Vec<PortfolioWithAssets>>,
    }

    impl InMemoryPortfolioRepository {
        fn with_portfolio(p: PortfolioWithAssets) -> Self {
            Self {
                portfolios: Mutex::new(vec![p]),
            }
        }
    }

    #[async_trait]
    impl PortfolioRepositoryTrait for InMemoryPortfolioRepository {
        fn get_by_id(&self, portfolio_id: &str) -> Result<PortfolioWithAssets> {
            self.portfolios
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.portfolio.id == portfolio_id)
                .cloned()
                .ok_or_else(|| Error::not_found("portfolio"))
        }

        fn list_for_owner(&self, owner_id: &str) -> Result<Vec<PortfolioWithAssets>> {
            Ok(self
                .portfolios
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.portfolio.owner_id == owner_id)
                .cloned()
                .collect())
        }

        async fn insert(
            &self,
            owner_id: &str,
            new_portfolio: NewPortfolio,
        ) -> Result<PortfolioWithAssets> {
            let id = new_portfolio.id.unwrap_or_else(|| "p-new".to_string());
            let assets = new_portfolio
                .assets
                .into_iter()
                .enumerate()
                .map(|(i, a)| Asset {
                    id: format!("{id}-a{i}"),
                    portfolio_id: id.clone(),
                    symbol: a.symbol,
                    asset_type: a.asset_type,
                    quantity: a.quantity,
                    avg_price: a.avg_price,
                })
                .collect();
            let p = PortfolioWithAssets {
                portfolio: Portfolio {
                    id,
                    name: new_portfolio.name,
                    owner_id: owner_id.to_string(),
                    created_at: Utc::now(),
                },
                assets,
            };
            self.portfolios.lock().unwrap().push(p.clone());
            Ok(p)
        }

        async fn insert_asset(
            &self,
            portfolio_id: &str,
            asset: NewAsset,
        ) -> Result<PortfolioWithAssets> {
            let mut portfolios = self.portfolios.lock().unwrap();
            let p = portfolios
                .iter_mut()
                .find(|p| p.portfolio.id == portfolio_id)
                .ok_or_else(|| Error::not_found("portfolio"))?;
            p.assets.push(Asset {
                id: format!("{portfolio_id}-a{}", p.assets.len()),
                portfolio_id: portfolio_id.to_string(),
                symbol: asset.symbol,
                asset_type: asset.asset_type,
                quantity: asset.quantity,
                avg_price: asset.avg_price,
            });
            Ok(p.clone())
        }
    }

    fn seeded_portfolio() -> PortfolioWithAssets {
        PortfolioWithAssets {
            portfolio: Portfolio {
                id: "p-1".to_string(),
                name: "Main Portfolio".to_string(),
                owner_id: "u-1".to_string(),
                created_at: Utc::now(),
            },
            assets: vec![
                Asset {
                    id: "as-1".to_string(),
                    portfolio_id: "p-1".to_string(),
                    symbol: "AAPL".to_string(),
                    asset_type: AssetType::Stock,
                    quantity: dec!(10),
                    avg_price: dec!(150.50),
                },
                Asset {
                    id: "as-2".to_string(),
                    portfolio_id: "p-1".to_string(),
                    symbol: "VOO".to_string(),
                    asset_type: AssetType::Etf,
                    quantity: dec!(15),
                    avg_price: dec!(420.30),
                },
            ],
        }
    }

    #[tokio::test]
    async fn add_asset_uppercases_and_validates() {
        let service = PortfolioService::new(Arc::new(
            InMemoryPortfolioRepository::with_portfolio(seeded_portfolio()),
        ));
        let p = service
            .add_asset(
                "u-1",
                "p-1",
                NewAsset {
                    symbol: "tsla".to_string(),
                    asset_type: AssetType::Stock,
                    quantity: dec!(5),
                    avg_price: dec!(250.75),
                },
            )
            .await
            .unwrap();
        assert!(p.assets.iter().any(|a| a.symbol == "TSLA"));
    }

    #[tokio::test]
    async fn add_asset_rejects_non_positive_quantity() {
        let service = PortfolioService::new(Arc::new(
            InMemoryPortfolioRepository::with_portfolio(seeded_portfolio()),
        ));
        let err = service
            .add_asset(
                "u-1",
                "p-1",
                NewAsset {
                    symbol: "TSLA".to_string(),
                    asset_type: AssetType::Stock,
                    quantity: dec!(0),
                    avg_price: dec!(1),
                },
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("valid quantity"));
    }

    #[tokio::test]
    async fn foreign_portfolio_is_hidden_as_not_found() {
        let service = PortfolioService::new(Arc::new(
            InMemoryPortfolioRepository::with_portfolio(seeded_portfolio()),
        ));
        let err = service.get_for_owner("intruder", "p-1").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn summary_totals_the_positions() {
        let p = seeded_portfolio();
        let summary = summarize(&p);
        // 10 * 150.50 + 15 * 420.30 = 7809.50 at cost
        assert_eq!(summary.total_cost, dec!(7809.50));
        assert_eq!(summary.total_value, dec!(8199.97));
        assert_eq!(summary.total_gain_loss, dec!(390.47));
        assert_eq!(summary.gain_loss_percent, dec!(5.00));
        assert_eq!(summary.positions.len(), 2);
    }

    #[tokio::test]
    async fn create_validates_initial_assets() {
        let service = PortfolioService::new(Arc::new(InMemoryPortfolioRepository::default()));
        let err = service
            .create_portfolio(
                "u-1",
                NewPortfolio {
                    id: None,
                    name: "Retirement Fund".to_string(),
                    assets: vec![NewAsset {
                        symbol: "".to_string(),
                        asset_type: AssetType::Stock,
                        quantity: dec!(1),
                        avg_price: dec!(1),
                    }],
                },
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("symbol"));
    }
}
