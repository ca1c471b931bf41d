use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::accounts_model::{AccountStatus, BrokerageAccount, NewBrokerageAccount};
use super::accounts_traits::{BrokerageAccountRepositoryTrait, BrokerageAccountServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing brokerage accounts and their cash balances.
pub struct BrokerageAccountService {
    repository: Arc<dyn BrokerageAccountRepositoryTrait>,
}

impl BrokerageAccountService {
    pub fn new(repository: Arc<dyn BrokerageAccountRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn ensure_active(account: &BrokerageAccount) -> Result<()> {
        if account.status != AccountStatus::Active {
            return Err(Error::ConstraintViolation(format!(
                "Account {} is {}",
                account.id,
                account.status.as_str()
            )));
        }
        Ok(())
    }

    fn ensure_positive(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid_input("Amount must be positive"));
        }
        Ok(())
    }
}

#[async_trait]
impl BrokerageAccountServiceTrait for BrokerageAccountService {
    fn get_account(&self, account_id: &str) -> Result<BrokerageAccount> {
        self.repository.get_by_id(account_id)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<BrokerageAccount>> {
        self.repository.list_for_user(user_id)
    }

    fn default_for_user(&self, user_id: &str) -> Result<BrokerageAccount> {
        self.repository
            .list_for_user(user_id)?
            .into_iter()
            .find(|a| a.status == AccountStatus::Active)
            .ok_or_else(|| Error::not_found(format!("No active brokerage account for user {user_id}")))
    }

    async fn open_account(&self, new_account: NewBrokerageAccount) -> Result<BrokerageAccount> {
        if let Some(balance) = new_account.balance {
            if balance < Decimal::ZERO {
                return Err(Error::invalid_input("Opening balance cannot be negative"));
            }
        }
        self.repository.insert(new_account).await
    }

    async fn debit(&self, account_id: &str, amount: Decimal) -> Result<BrokerageAccount> {
        Self::ensure_positive(amount)?;
        let account = self.repository.get_by_id(account_id)?;
        Self::ensure_active(&account)?;
        debug!("Debiting {amount} from account {account_id}");
        self.repository.adjust_balance(account_id, -amount).await
    }

    async fn credit(&self, account_id: &str, amount: Decimal) -> Result<BrokerageAccount> {
        Self::ensure_positive(amount)?;
        let account = self.repository.get_by_id(account_id)?;
        Self::ensure_active(&account)?;
        debug!("Crediting {amount} to account {account_id}");
        self.repository.adjust_balance(account_id, amount).await
    }
}
