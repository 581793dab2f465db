//! Serializable copy of a game at one point in time.

use crate::error::GameError;
use crate::types::{Board, Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Board, turn and outcome frozen for display or export.
///
/// The board is stored as rows so the JSON form reads like the grid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board rows, top to bottom.
    board: Vec<Vec<Mark>>,
    /// Mark that moves next.
    turn: Mark,
    /// Outcome after the last move.
    outcome: Outcome,
}

impl Snapshot {
    pub(crate) fn capture(board: &Board, turn: Mark, outcome: Outcome) -> Self {
        Self {
            board: board.rows().map(<[Mark]>::to_vec).collect(),
            turn,
            outcome,
        }
    }

    /// Rebuilds the board.
    ///
    /// # Errors
    ///
    /// Fails if a deserialized snapshot is not square.
    pub fn to_board(&self) -> Result<Board, GameError> {
        Board::from_rows(self.board.clone())
    }
}
