use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store `user`, failing if its username or email is already registered.
    async fn create_user(&self, user: &User) -> Result<(), UserRepositoryError>;
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepositoryError>;
}

/// Process-local account store. Accounts live as long as the server process.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> UserRepositoryError {
    UserRepositoryError::Storage("user store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.contains_key(&user.username) {
            return Err(UserRepositoryError::UsernameTaken);
        }
        if users.values().any(|existing| existing.email == user.email) {
            return Err(UserRepositoryError::EmailTaken);
        }

        users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepositoryError> {
        let users = self.users.read().map_err(poisoned)?;
        users
            .get(username)
            .cloned()
            .ok_or(UserRepositoryError::NotFound)
    }
}
