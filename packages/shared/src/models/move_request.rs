use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::models::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/llm-chess-move`.
///
/// Only `board` and `player` are required. The move history fields are
/// passed through to the prompt verbatim, so their element shape is left to
/// the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub board: Board,
    pub player: Player,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_move: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_moves: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_moves: Option<Vec<Value>>,
}

impl MoveRequest {
    pub fn new(board: Board, player: Player) -> Self {
        MoveRequest {
            board,
            player,
            last_move: None,
            past_moves: None,
            valid_moves: None,
        }
    }
}
