use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use tradeshift_core::errors::Result;
use tradeshift_core::portfolio::{
    NewAsset, NewPortfolio, PortfolioRepositoryTrait, PortfolioWithAssets,
};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{assets, portfolios};
use crate::text::format_datetime;

use super::model::{AssetDB, PortfolioDB};

/// Repository for portfolios and the assets they hold. Portfolio and asset
/// rows are always read and written together as one aggregate.
pub struct PortfolioRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PortfolioRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn load_aggregate(conn: &mut SqliteConnection, portfolio_id: &str) -> Result<PortfolioWithAssets> {
    let portfolio_row = portfolios::table
        .select(PortfolioDB::as_select())
        .find(portfolio_id)
        .first::<PortfolioDB>(conn)
        .into_core()?;

    let asset_rows = AssetDB::belonging_to(&portfolio_row)
        .select(AssetDB::as_select())
        .order(assets::symbol.asc())
        .load::<AssetDB>(conn)
        .into_core()?;

    Ok(PortfolioWithAssets {
        portfolio: portfolio_row.into_domain()?,
        assets: asset_rows
            .into_iter()
            .map(AssetDB::into_domain)
            .collect::<Result<Vec<_>>>()?,
    })
}

fn asset_row(portfolio_id: &str, asset: NewAsset) -> AssetDB {
    AssetDB {
        id: uuid::Uuid::new_v4().to_string(),
        portfolio_id: portfolio_id.to_string(),
        symbol: asset.symbol,
        asset_type: asset.asset_type.as_str().to_string(),
        quantity: asset.quantity.to_string(),
        avg_price: asset.avg_price.to_string(),
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    fn get_by_id(&self, portfolio_id: &str) -> Result<PortfolioWithAssets> {
        let mut conn = get_connection(&self.pool)?;
        load_aggregate(&mut conn, portfolio_id)
    }

    fn list_for_owner(&self, owner_id_param: &str) -> Result<Vec<PortfolioWithAssets>> {
        let mut conn = get_connection(&self.pool)?;

        let portfolio_rows = portfolios::table
            .select(PortfolioDB::as_select())
            .filter(portfolios::owner_id.eq(owner_id_param))
            .order(portfolios::created_at.asc())
            .load::<PortfolioDB>(&mut conn)
            .into_core()?;

        let asset_rows = AssetDB::belonging_to(&portfolio_rows)
            .select(AssetDB::as_select())
            .order(assets::symbol.asc())
            .load::<AssetDB>(&mut conn)
            .into_core()?;

        asset_rows
            .grouped_by(&portfolio_rows)
            .into_iter()
            .zip(portfolio_rows)
            .map(|(group, portfolio_row)| {
                Ok(PortfolioWithAssets {
                    portfolio: portfolio_row.into_domain()?,
                    assets: group
                        .into_iter()
                        .map(AssetDB::into_domain)
                        .collect::<Result<Vec<_>>>()?,
                })
            })
            .collect()
    }

    async fn insert(
        &self,
        owner_id: &str,
        new_portfolio: NewPortfolio,
    ) -> Result<PortfolioWithAssets> {
        let owner_owned = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                let portfolio_row = PortfolioDB {
                    id: new_portfolio
                        .id
                        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                    name: new_portfolio.name,
                    owner_id: owner_owned,
                    created_at: format_datetime(&chrono::Utc::now()),
                };

                diesel::insert_into(portfolios::table)
                    .values(&portfolio_row)
                    .execute(conn)
                    .into_core()?;

                let asset_rows: Vec<AssetDB> = new_portfolio
                    .assets
                    .into_iter()
                    .map(|a| asset_row(&portfolio_row.id, a))
                    .collect();

                if !asset_rows.is_empty() {
                    diesel::insert_into(assets::table)
                        .values(&asset_rows)
                        .execute(conn)
                        .into_core()?;
                }

                load_aggregate(conn, &portfolio_row.id)
            })
            .await
    }

    async fn insert_asset(
        &self,
        portfolio_id: &str,
        asset: NewAsset,
    ) -> Result<PortfolioWithAssets> {
        let id_owned = portfolio_id.to_string();
        self.writer
            .exec(move |conn| {
                // Surfaces NotFound before the foreign key would.
                load_aggregate(conn, &id_owned)?;

                diesel::insert_into(assets::table)
                    .values(&asset_row(&id_owned, asset))
                    .execute(conn)
                    .into_core()?;

                load_aggregate(conn, &id_owned)
            })
            .await
    }
}
