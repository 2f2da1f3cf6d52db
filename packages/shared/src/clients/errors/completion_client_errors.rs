use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionClientError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Completion request timed out")]
    Timeout,
    #[error("Completion service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),
    #[error("Completion response contained no choices")]
    EmptyResponse,
}

impl From<reqwest::Error> for CompletionClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CompletionClientError::Timeout
        } else if error.is_decode() {
            CompletionClientError::InvalidResponse(error.to_string())
        } else {
            CompletionClientError::Transport(error.to_string())
        }
    }
}
