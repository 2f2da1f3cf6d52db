use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::models::move_request::MoveRequest;

/// Which prompt wording to send.
///
/// `Basic` restates the board and asks for a move. `Detailed` also spells out
/// the movement rules and passes the move history and legal move list along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    Basic,
    #[default]
    Detailed,
}

impl PromptStyle {
    /// Sampling temperature paired with this wording when none is configured.
    pub fn default_temperature(&self) -> f32 {
        match self {
            PromptStyle::Basic => 0.2,
            PromptStyle::Detailed => 0.8,
        }
    }
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PromptStyle::Basic => f.write_str("basic"),
            PromptStyle::Detailed => f.write_str("detailed"),
        }
    }
}

impl FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(PromptStyle::Basic),
            "detailed" => Ok(PromptStyle::Detailed),
            other => Err(format!(
                "unknown prompt style '{}', expected 'basic' or 'detailed'",
                other
            )),
        }
    }
}

const REPLY_FORMAT: &str = r#"{"fromRow": int, "fromCol": int, "toRow": int, "toCol": int}"#;

const MOVEMENT_RULES: &str = "\
Rules:
- Pawns move one square forward, or two squares forward from their starting row, and capture one square diagonally forward. White pawns move up the board (towards row 0), black pawns move down (towards row 7).
- Knights move in an L shape: two squares in one direction and one square perpendicular. They may jump over other pieces.
- Bishops move any number of squares diagonally. Rooks move any number of squares horizontally or vertically. Queens combine both. None of them may jump over pieces.
- Kings move one square in any direction.
- A piece may not move onto a square occupied by a piece of its own color. Moving onto an opponent's piece captures it.
- You may never make a move that leaves your own king in check. If your king is in check you must get it out of check.";

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptService {
    style: PromptStyle,
}

impl PromptService {
    pub fn new(style: PromptStyle) -> Self {
        PromptService { style }
    }

    /// Render the prompt for `request`. Output depends only on the request and
    /// the configured style.
    pub fn build_prompt(&self, request: &MoveRequest) -> String {
        match self.style {
            PromptStyle::Basic => Self::basic_prompt(request),
            PromptStyle::Detailed => Self::detailed_prompt(request),
        }
    }

    fn basic_prompt(request: &MoveRequest) -> String {
        format!(
            "You are a chess engine. Given the following board state (8x8, top row is row 0, left column is col 0), \
and it's {player}'s turn, return the best legal move as JSON in the format:\n\
{format}\n\
Only return the JSON object, nothing else.\n\
\n\
Board:\n\
{board}\n",
            player = request.player,
            format = REPLY_FORMAT,
            board = request.board.render(),
        )
    }

    fn detailed_prompt(request: &MoveRequest) -> String {
        let last_move = request
            .last_move
            .as_ref()
            .filter(|value| !value.is_null())
            .map(Value::to_string)
            .unwrap_or_else(|| "none".to_string());

        format!(
            "You are a strong chess engine playing as {player}. It is {player}'s turn to move; your opponent is {opponent}.\n\
\n\
The board is an 8x8 grid. Row 0 is the top of the board and column 0 is the left edge. \
Each square holds either a piece written as color-type (for example white-queen) or the word empty. \
Black starts at the top (rows 0 and 1) and white starts at the bottom (rows 6 and 7).\n\
\n\
Board:\n\
{board}\n\
\n\
{rules}\n\
\n\
Opponent's last move: {last_move}\n\
Moves played so far: {past_moves}\n\
Legal moves available to {player}: {valid_moves}\n\
\n\
Choose the strongest move for {player}. If a list of legal moves is given, your move must be one of them. \
Never repeat a move that has already been played if another good move exists.\n\
\n\
Reply with ONLY a JSON object in exactly this format, with no explanation, markdown or extra text:\n\
{format}\n",
            player = request.player,
            opponent = request.player.opponent(),
            board = request.board.render(),
            rules = MOVEMENT_RULES,
            last_move = last_move,
            past_moves = render_list(request.past_moves.as_deref()),
            valid_moves = render_list(request.valid_moves.as_deref()),
            format = REPLY_FORMAT,
        )
    }
}

fn render_list(values: Option<&[Value]>) -> String {
    let values = values.unwrap_or_default();
    let items: Vec<String> = values.iter().map(Value::to_string).collect();
    format!("[{}]", items.join(", "))
}
