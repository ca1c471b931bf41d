//! Database model for brokerage accounts.

use diesel::prelude::*;

use tradeshift_core::accounts::{AccountStatus, BrokerageAccount, NewBrokerageAccount};
use tradeshift_core::constants::STARTING_CASH_BALANCE;
use tradeshift_core::errors::Result;

use crate::text::{format_datetime, parse_datetime, parse_decimal};

/// Database model for brokerage accounts. The balance is stored as decimal
/// text to avoid float drift.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::brokerage_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BrokerageAccountDB {
    pub id: String,
    pub user_id: String,
    pub balance: String,
    pub status: String,
    pub created_at: String,
}

impl BrokerageAccountDB {
    pub fn into_domain(self) -> Result<BrokerageAccount> {
        let balance = parse_decimal("brokerage_accounts.balance", &self.balance)?;
        let created_at = parse_datetime("brokerage_accounts.created_at", &self.created_at)?;
        Ok(BrokerageAccount {
            id: self.id,
            user_id: self.user_id,
            balance,
            status: AccountStatus::parse(&self.status),
            created_at,
        })
    }
}

impl From<NewBrokerageAccount> for BrokerageAccountDB {
    fn from(domain: NewBrokerageAccount) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: domain.user_id,
            balance: domain
                .balance
                .unwrap_or(STARTING_CASH_BALANCE)
                .to_string(),
            status: domain.status.unwrap_or_default().as_str().to_string(),
            created_at: format_datetime(&chrono::Utc::now()),
        }
    }
}
