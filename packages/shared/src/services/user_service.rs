use std::sync::Arc;
use tracing::debug;

use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::user_service_errors::UserServiceError;

/// bcrypt work factor used when none is configured.
pub const DEFAULT_HASH_COST: u32 = 10;
/// Work factors bcrypt accepts.
pub const MIN_HASH_COST: u32 = 4;
pub const MAX_HASH_COST: u32 = 31;

pub struct UserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
    hash_cost: u32,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>, hash_cost: u32) -> Self {
        UserService {
            repository,
            hash_cost,
        }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, UserServiceError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(UserServiceError::ValidationError(
                "Username, email, or password cannot be empty".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(password, self.hash_cost)
            .map_err(|e| UserServiceError::HashingError(e.to_string()))?;
        let user = User::new(username.to_string(), email.to_string(), password_hash);

        self.repository
            .create_user(&user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken | UserRepositoryError::EmailTaken => {
                    UserServiceError::UserAlreadyExists
                }
                _ => UserServiceError::RepositoryError(e.to_string()),
            })?;
        debug!("Registered user {}", user.username);
        Ok(user)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<User, UserServiceError> {
        if username.is_empty() {
            return Err(UserServiceError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_user_by_username(username)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })
    }
}
