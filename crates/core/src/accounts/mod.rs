//! Brokerage accounts module - domain models, services, and traits.

mod accounts_model;
mod accounts_service;
mod accounts_traits;

pub use accounts_model::{AccountStatus, BrokerageAccount, NewBrokerageAccount};
pub use accounts_service::BrokerageAccountService;
pub use accounts_traits::{BrokerageAccountRepositoryTrait, BrokerageAccountServiceTrait};
