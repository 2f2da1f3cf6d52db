use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use shared::clients::completion_client::{CompletionClient, OpenAiCompletionClient};
use shared::clients::config::CompletionConfig;
use shared::clients::errors::completion_client_errors::CompletionClientError;
use shared::repositories::user_repository::{InMemoryUserRepository, UserRepository};
use shared::services::auth_service::AuthService;
use shared::services::move_service::MoveService;
use shared::services::prompt_service::PromptService;
use shared::services::user_service::UserService;

/// Wire the OpenAI client, the account store and the services into an
/// [`state::AppState`]. `password_hash_cost` is the bcrypt work factor.
pub fn build_state(
    config: CompletionConfig,
    password_hash_cost: u32,
) -> Result<state::AppState, CompletionClientError> {
    let prompt_service = PromptService::new(config.prompt_style);
    let client: Arc<dyn CompletionClient + Send + Sync> =
        Arc::new(OpenAiCompletionClient::new(config)?);
    let move_service = Arc::new(MoveService::new(client, prompt_service));

    let user_repository: Arc<dyn UserRepository + Send + Sync> =
        Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(user_repository, password_hash_cost));
    let auth_service = Arc::new(AuthService::new(user_service.clone()));

    Ok(state::AppState {
        move_service,
        user_service,
        auth_service,
    })
}

pub fn create_app(app_state: state::AppState) -> Router {
    // Browser frontends are served from other origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::moves::routes())
        .merge(routes::auth::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
