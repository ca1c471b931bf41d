//! Database models for portfolios and assets.

use diesel::prelude::*;

use tradeshift_core::errors::Result;
use tradeshift_core::portfolio::{Asset, AssetType, Portfolio};

use crate::text::{parse_datetime, parse_decimal};

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolios)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioDB {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub created_at: String,
}

impl PortfolioDB {
    pub fn into_domain(self) -> Result<Portfolio> {
        let created_at = parse_datetime("portfolios.created_at", &self.created_at)?;
        Ok(Portfolio {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id,
            created_at,
        })
    }
}

#[derive(Queryable, Identifiable, Insertable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(belongs_to(PortfolioDB, foreign_key = portfolio_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub asset_type: String,
    pub quantity: String,
    pub avg_price: String,
}

impl AssetDB {
    pub fn into_domain(self) -> Result<Asset> {
        let quantity = parse_decimal("assets.quantity", &self.quantity)?;
        let avg_price = parse_decimal("assets.avg_price", &self.avg_price)?;
        Ok(Asset {
            id: self.id,
            portfolio_id: self.portfolio_id,
            symbol: self.symbol,
            asset_type: AssetType::parse(&self.asset_type),
            quantity,
            avg_price,
        })
    }
}
