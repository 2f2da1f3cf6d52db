use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{debug, error, warn};

use crate::{error::ApiError, state::AppState};
use shared::models::auth::requests::{LoginRequest, RegisterRequest};
use shared::models::auth::responses::AccountResponse;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
}

fn reject(rejection: JsonRejection) -> ApiError {
    warn!("Rejected account request: {}", rejection.body_text());
    ApiError::MalformedAccountRequest(rejection.body_text())
}

async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, ApiError> {
    let Json(user_data) = payload.map_err(reject)?;

    state
        .user_service
        .register(&user_data.username, &user_data.email, &user_data.password)
        .await
        .map_err(|e| {
            error!("Failed to register user {}: {}", user_data.username, e);
            ApiError::from(e)
        })?;
    debug!("User registered successfully: {}", user_data.username);
    Ok(Json(AccountResponse::ok()))
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, ApiError> {
    let Json(login_data) = payload.map_err(reject)?;

    state
        .auth_service
        .authenticate_user(&login_data.username, &login_data.password)
        .await
        .map_err(|e| {
            error!("Failed to authenticate user {}: {}", login_data.username, e);
            ApiError::from(e)
        })?;
    debug!("User logged in: {}", login_data.username);
    Ok(Json(AccountResponse::ok()))
}
