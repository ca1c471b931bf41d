use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use tradeshift_core::accounts::{
    BrokerageAccount, BrokerageAccountRepositoryTrait, NewBrokerageAccount,
};
use tradeshift_core::errors::{Result, ValidationError};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::brokerage_accounts;
use crate::schema::brokerage_accounts::dsl::*;
use crate::text::parse_decimal;

use super::model::BrokerageAccountDB;

/// Repository for managing brokerage account records in the database.
pub struct BrokerageAccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BrokerageAccountRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl BrokerageAccountRepositoryTrait for BrokerageAccountRepository {
    fn get_by_id(&self, account_id: &str) -> Result<BrokerageAccount> {
        let mut conn = get_connection(&self.pool)?;

        let row = brokerage_accounts
            .select(BrokerageAccountDB::as_select())
            .find(account_id)
            .first::<BrokerageAccountDB>(&mut conn)
            .into_core()?;

        row.into_domain()
    }

    fn list_for_user(&self, user_id_param: &str) -> Result<Vec<BrokerageAccount>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = brokerage_accounts
            .select(BrokerageAccountDB::as_select())
            .filter(user_id.eq(user_id_param))
            .order(created_at.asc())
            .load::<BrokerageAccountDB>(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(BrokerageAccountDB::into_domain)
            .collect()
    }

    async fn insert(&self, new_account: NewBrokerageAccount) -> Result<BrokerageAccount> {
        self.writer
            .exec(move |conn| {
                let mut row: BrokerageAccountDB = new_account.into();
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(brokerage_accounts::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                row.into_domain()
            })
            .await
    }

    async fn adjust_balance(&self, account_id: &str, delta: Decimal) -> Result<BrokerageAccount> {
        let id_owned = account_id.to_string();
        self.writer
            .exec(move |conn| {
                // Read-check-write runs inside the single writer transaction,
                // so two debits cannot both pass the funds check.
                let row = brokerage_accounts
                    .select(BrokerageAccountDB::as_select())
                    .find(&id_owned)
                    .first::<BrokerageAccountDB>(conn)
                    .into_core()?;

                let current = parse_decimal("brokerage_accounts.balance", &row.balance)?;
                let updated = current + delta;
                if updated < Decimal::ZERO {
                    return Err(ValidationError::InsufficientFunds {
                        required: -delta,
                        available: current,
                    }
                    .into());
                }

                diesel::update(brokerage_accounts.find(&id_owned))
                    .set(balance.eq(updated.to_string()))
                    .execute(conn)
                    .into_core()?;

                BrokerageAccountDB {
                    balance: updated.to_string(),
                    ..row
                }
                .into_domain()
            })
            .await
    }
}
