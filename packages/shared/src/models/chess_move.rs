use serde::{Deserialize, Serialize};

/// A proposed board transition as returned by the completion service.
///
/// Coordinates are whatever the model produced: no bounds or legality checks
/// are applied, so callers that need a legal move must validate it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from_row: i64,
    pub from_col: i64,
    pub to_row: i64,
    pub to_col: i64,
}

impl Move {
    pub fn new(from_row: i64, from_col: i64, to_row: i64, to_col: i64) -> Self {
        Move {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }
}

/// Success body of the move endpoint. `move` is always present, `null` when
/// no usable suggestion could be read from the completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub suggested: Option<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
