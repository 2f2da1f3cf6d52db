use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("Username or email already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Password hashing error: {0}")]
    HashingError(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}
