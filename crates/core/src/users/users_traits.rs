use async_trait::async_trait;

use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserUpdate};

/// Trait for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    fn list(&self) -> Result<Vec<User>>;
    async fn insert(&self, new_user: NewUser) -> Result<User>;
    async fn update(&self, user_id: &str, update: UserUpdate) -> Result<User>;
    async fn delete(&self, user_id: &str) -> Result<usize>;
}

/// Trait for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn list_users(&self) -> Result<Vec<User>>;
    async fn register_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_user(&self, user_id: &str, update: UserUpdate) -> Result<User>;
    async fn delete_user(&self, user_id: &str) -> Result<()>;
}
