use thiserror::Error;

use crate::services::errors::user_service_errors::UserServiceError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Password hashing error: {0}")]
    HashingError(String),
    #[error("User service error: {0}")]
    UserServiceError(#[from] UserServiceError),
}
