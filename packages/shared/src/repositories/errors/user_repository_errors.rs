use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Email already exists")]
    EmailTaken,
    #[error("Storage error: {0}")]
    Storage(String),
}
