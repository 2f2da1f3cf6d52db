use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BOARD_SIZE: usize = 8;

/// Token written for a square with no piece on it.
pub const EMPTY_CELL: &str = "empty";

/// A single square: `None` when empty, otherwise a piece descriptor such as `"white-queen"`.
pub type Cell = Option<String>;

/// An 8x8 grid of cells. Row 0 is the top of the board, column 0 the left edge.
///
/// The shape is checked on construction, so a `Board` in hand always has
/// exactly eight rows of eight cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardShapeError {
    #[error("board must have 8 rows, found {0}")]
    RowCount(usize),
    #[error("board row {row} must have 8 columns, found {found}")]
    ColumnCount { row: usize, found: usize },
}

impl Board {
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, BoardShapeError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardShapeError::RowCount(rows.len()));
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != BOARD_SIZE)
        {
            return Err(BoardShapeError::ColumnCount {
                row,
                found: cells.len(),
            });
        }
        Ok(Board { rows })
    }

    /// Text form used in prompts: one line per row, cells comma separated,
    /// empty squares (null or blank) written as `empty`.
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .map(|cell| match cell.as_deref() {
                        Some(piece) if !piece.is_empty() => piece,
                        _ => EMPTY_CELL,
                    })
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardShapeError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Board::new(rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}
