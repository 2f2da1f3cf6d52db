use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{debug, error, warn};

use crate::{error::ApiError, state::AppState};
use shared::models::chess_move::MoveResponse;
use shared::models::move_request::MoveRequest;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/llm-chess-move", post(llm_chess_move))
}

async fn llm_chess_move(
    State(state): State<AppState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected move request: {}", rejection.body_text());
        ApiError::MalformedRequest(rejection.body_text())
    })?;

    let suggested = state
        .move_service
        .suggest_move(&request)
        .await
        .map_err(|e| {
            error!("Failed to get move for {}: {}", request.player, e);
            ApiError::from(e)
        })?;
    debug!("Responding with move {:?}", suggested);

    Ok(Json(MoveResponse { suggested }))
}
