use thiserror::Error;

use crate::clients::errors::completion_client_errors::CompletionClientError;

#[derive(Debug, Error)]
pub enum MoveServiceError {
    #[error("Completion service error: {0}")]
    Completion(#[from] CompletionClientError),
}
