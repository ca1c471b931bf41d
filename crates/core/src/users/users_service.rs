use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::users_model::{NewUser, Role, User, UserUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing users.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Drops fields that are present but blank, so the update semantics match
    /// the original backend: empty strings are treated as "not provided".
    fn normalize_update(update: UserUpdate) -> UserUpdate {
        fn non_blank(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
        }
        UserUpdate {
            username: non_blank(update.username),
            name: non_blank(update.name),
            email: non_blank(update.email),
            password_hash: update.password_hash,
            contact_no: non_blank(update.contact_no),
            role: update.role,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(email)
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.repository.list()
    }

    /// Registers a new user, rejecting duplicate email or username.
    async fn register_user(&self, mut new_user: NewUser) -> Result<User> {
        new_user.email = new_user.email.trim().to_lowercase();
        new_user.username = new_user.username.trim().to_string();
        new_user.name = new_user.name.trim().to_string();

        if self.repository.find_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "User with this email already exists: {}",
                new_user.email
            )));
        }
        if self
            .repository
            .find_by_username(&new_user.username)?
            .is_some()
        {
            return Err(Error::ConstraintViolation(format!(
                "Username already taken: {}",
                new_user.username
            )));
        }

        if new_user.role.is_none() {
            new_user.role = Some(Role::User);
        }

        debug!("Registering user {}", new_user.username);
        self.repository.insert(new_user).await
    }

    /// Applies a partial update; only provided, non-blank fields change.
    async fn update_user(&self, user_id: &str, update: UserUpdate) -> Result<User> {
        let current = self.repository.get_by_id(user_id)?;
        let update = Self::normalize_update(update);

        if let Some(username) = &update.username {
            if let Some(other) = self.repository.find_by_username(username)? {
                if other.id != current.id {
                    return Err(Error::ConstraintViolation(format!(
                        "Username already taken: {username}"
                    )));
                }
            }
        }
        if let Some(email) = &update.email {
            if let Some(other) = self.repository.find_by_email(email)? {
                if other.id != current.id {
                    return Err(Error::ConstraintViolation(format!(
                        "Email already registered: {email}"
                    )));
                }
            }
        }

        if update.is_empty() {
            return Ok(current);
        }
        self.repository.update(user_id, update).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        // Surfaces a NotFound instead of silently deleting nothing.
        self.repository.get_by_id(user_id)?;
        self.repository.delete(user_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        fn with_user(user: User) -> Self {
            Self {
                users: Mutex::new(vec![user]),
            }
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepository {
        fn get_by_id(&self, user_id: &str) -> Result<User> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned()
                .ok_or_else(|| Error::not_found(format!("User not found with ID: {user_id}")))
        }

        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        fn find_by_username(&self, username: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        fn list(&self) -> Result<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn insert(&self, new_user: NewUser) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let user = User {
                id: new_user
                    .id
                    .unwrap_or_else(|| format!("u-{}", users.len() + 1)),
                username: new_user.username,
                name: new_user.name,
                email: new_user.email,
                password_hash: new_user.password_hash,
                contact_no: new_user.contact_no,
                role: new_user.role.unwrap_or_default(),
                created_at: Utc::now(),
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn update(&self, user_id: &str, update: UserUpdate) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.id == user_id)
                .ok_or_else(|| Error::not_found("user"))?;
            if let Some(v) = update.username {
                user.username = v;
            }
            if let Some(v) = update.name {
                user.name = v;
            }
            if let Some(v) = update.email {
                user.email = v;
            }
            if let Some(v) = update.password_hash {
                user.password_hash = v;
            }
            if let Some(v) = update.contact_no {
                user.contact_no = Some(v);
            }
            if let Some(v) = update.role {
                user.role = v;
            }
            Ok(user.clone())
        }

        async fn delete(&self, user_id: &str) -> Result<usize> {
            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id != user_id);
            Ok(before - users.len())
        }
    }

    fn existing_user() -> User {
        User {
            id: "u-1".to_string(),
            username: "jdoe".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "hash".to_string(),
            contact_no: None,
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            id: None,
            username: username.to_string(),
            name: "Someone".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            contact_no: None,
            role: None,
        }
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::with_user(
            existing_user(),
        )));
        let err = service
            .register_user(new_user("other", "jane@example.com"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("email already exists"));
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::with_user(
            existing_user(),
        )));
        let err = service
            .register_user(new_user("jdoe", "new@example.com"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Username already taken"));
    }

    #[tokio::test]
    async fn register_defaults_role_and_lowercases_email() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
        let user = service
            .register_user(new_user("fresh", "Fresh@Example.COM"))
            .await
            .unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "fresh@example.com");
    }

    #[tokio::test]
    async fn update_ignores_blank_fields() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::with_user(
            existing_user(),
        )));
        let updated = service
            .update_user(
                "u-1",
                UserUpdate {
                    name: Some("  ".to_string()),
                    contact_no: Some("555-0101".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Jane Doe");
        assert_eq!(updated.contact_no.as_deref(), Some("555-0101"));
    }

    #[tokio::test]
    async fn update_keeps_own_username() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::with_user(
            existing_user(),
        )));
        // Re-submitting a user's own username is not a collision.
        let updated = service
            .update_user(
                "u-1",
                UserUpdate {
                    username: Some("jdoe".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.username, "jdoe");
    }

    #[tokio::test]
    async fn update_rejects_username_held_by_another_user() {
        let repo = Arc::new(InMemoryUserRepository::with_user(existing_user()));
        let service = UserService::new(repo);
        let second = service
            .register_user(new_user("asmith", "alex@example.com"))
            .await
            .unwrap();
        let err = service
            .update_user(
                &second.id,
                UserUpdate {
                    username: Some("jdoe".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
        assert!(err.to_string().contains("Username already taken"));
    }

    #[tokio::test]
    async fn update_rejects_email_held_by_another_user() {
        let repo = Arc::new(InMemoryUserRepository::with_user(existing_user()));
        let service = UserService::new(repo);
        let second = service
            .register_user(new_user("asmith", "alex@example.com"))
            .await
            .unwrap();
        let err = service
            .update_user(
                &second.id,
                UserUpdate {
                    email: Some("jane@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
        assert!(err.to_string().contains("Email already registered"));
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
        let err = service.delete_user("nope").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
