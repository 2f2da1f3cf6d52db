use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::auth::responses::AccountResponse;
use shared::models::chess_move::ErrorResponse;
use shared::services::errors::auth_service_errors::AuthServiceError;
use shared::services::errors::move_service_errors::MoveServiceError;
use shared::services::errors::user_service_errors::UserServiceError;
use thiserror::Error;

/// Body sent when the completion service fails. The cause is logged, never returned.
pub const COMPLETION_FAILURE_MESSAGE: &str = "Failed to get move from OpenAI";

/// Body sent for account failures that are not the caller's fault.
pub const ACCOUNT_FAILURE_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Malformed account request: {0}")]
    MalformedAccountRequest(String),
    #[error(transparent)]
    MoveService(#[from] MoveServiceError),
    #[error(transparent)]
    UserService(#[from] UserServiceError),
    #[error(transparent)]
    AuthService(#[from] AuthServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::MalformedRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::MoveService(MoveServiceError::Completion(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                COMPLETION_FAILURE_MESSAGE.to_string(),
            ),
            ApiError::MalformedAccountRequest(message) => {
                return account_failure(StatusCode::BAD_REQUEST, message)
            }
            ApiError::UserService(e) => return user_service_failure(e),
            ApiError::AuthService(AuthServiceError::InvalidCredentials) => {
                return account_failure(
                    StatusCode::UNAUTHORIZED,
                    AuthServiceError::InvalidCredentials.to_string(),
                )
            }
            ApiError::AuthService(AuthServiceError::UserServiceError(e)) => {
                return user_service_failure(e)
            }
            ApiError::AuthService(AuthServiceError::HashingError(_)) => {
                return account_failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ACCOUNT_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

fn user_service_failure(e: UserServiceError) -> Response {
    match e {
        UserServiceError::UserAlreadyExists => {
            account_failure(StatusCode::BAD_REQUEST, e.to_string())
        }
        UserServiceError::ValidationError(message) => {
            account_failure(StatusCode::BAD_REQUEST, message)
        }
        UserServiceError::UserNotFound => account_failure(
            StatusCode::UNAUTHORIZED,
            AuthServiceError::InvalidCredentials.to_string(),
        ),
        UserServiceError::HashingError(_) | UserServiceError::RepositoryError(_) => {
            account_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                ACCOUNT_FAILURE_MESSAGE.to_string(),
            )
        }
    }
}

fn account_failure(status: StatusCode, message: String) -> Response {
    (status, Json(AccountResponse::failure(message))).into_response()
}
