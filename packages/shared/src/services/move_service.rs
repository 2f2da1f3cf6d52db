use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::clients::completion_client::CompletionClient;
use crate::models::chess_move::Move;
use crate::models::move_request::MoveRequest;
use crate::services::errors::move_service_errors::MoveServiceError;
use crate::services::prompt_service::PromptService;
use crate::utils::json_extraction::extract_json;

/// Turns a board position into a move suggestion by asking the completion
/// service.
///
/// The returned move is untrusted model output: it is not checked against the
/// board, the bounds of the grid, or the rules of chess.
pub struct MoveService {
    client: Arc<dyn CompletionClient + Send + Sync>,
    prompt_service: PromptService,
}

impl MoveService {
    pub fn new(
        client: Arc<dyn CompletionClient + Send + Sync>,
        prompt_service: PromptService,
    ) -> Self {
        MoveService {
            client,
            prompt_service,
        }
    }

    /// `Ok(None)` means the service answered but no move could be read from
    /// the text. Only a failed completion call is an error.
    pub async fn suggest_move(
        &self,
        request: &MoveRequest,
    ) -> Result<Option<Move>, MoveServiceError> {
        debug!(
            "Requesting move for {}:\n{}",
            request.player,
            request.board.render()
        );

        let prompt = self.prompt_service.build_prompt(request);
        let completion = self.client.complete(&prompt).await?;
        debug!("Raw completion: {}", completion);

        let suggested = extract_json::<Move>(&completion);
        match &suggested {
            Some(mv) => info!(
                "Suggested move for {}: ({}, {}) -> ({}, {})",
                request.player, mv.from_row, mv.from_col, mv.to_row, mv.to_col
            ),
            None => {
                let preview: String = completion.chars().take(200).collect();
                warn!("No move found in completion: {}", preview);
            }
        }

        Ok(suggested)
    }
}
