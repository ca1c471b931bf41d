use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::accounts::accounts_model::{BrokerageAccount, NewBrokerageAccount};
use crate::errors::Result;

/// Trait for brokerage account repository operations.
#[async_trait]
pub trait BrokerageAccountRepositoryTrait: Send + Sync {
    fn get_by_id(&self, account_id: &str) -> Result<BrokerageAccount>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<BrokerageAccount>>;
    async fn insert(&self, new_account: NewBrokerageAccount) -> Result<BrokerageAccount>;

    /// Applies `delta` to the balance inside the write transaction, failing
    /// with an insufficient-funds validation error when the result would be
    /// negative. Serializing the check with the write avoids double spends.
    async fn adjust_balance(&self, account_id: &str, delta: Decimal) -> Result<BrokerageAccount>;
}

/// Trait for brokerage account service operations.
#[async_trait]
pub trait BrokerageAccountServiceTrait: Send + Sync {
    fn get_account(&self, account_id: &str) -> Result<BrokerageAccount>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<BrokerageAccount>>;

    /// The account used when an order does not name one.
    fn default_for_user(&self, user_id: &str) -> Result<BrokerageAccount>;

    async fn open_account(&self, new_account: NewBrokerageAccount) -> Result<BrokerageAccount>;
    async fn debit(&self, account_id: &str, amount: Decimal) -> Result<BrokerageAccount>;
    async fn credit(&self, account_id: &str, amount: Decimal) -> Result<BrokerageAccount>;
}
