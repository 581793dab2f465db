//! Error types for board and game operations.

use crate::types::Cell;
use derive_more::{Display, Error};

/// Errors raised by board construction and cell addressing.
///
/// Selecting an occupied cell is not an error: it is silently ignored.
/// These variants cover programmer errors only.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The cell lies outside the board.
    #[display("Cell {} is outside the {}x{} board", cell, size, size)]
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Board dimension.
        size: usize,
    },

    /// A board must be between 1x1 and [`MAX_SIZE`](crate::MAX_SIZE) square.
    #[display("Invalid board size {}", _0)]
    InvalidSize(#[error(not(source))] usize),

    /// A row passed to [`Board::from_rows`](crate::Board::from_rows) had the wrong length.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    NotSquare {
        /// Index of the bad row.
        row: usize,
        /// Expected row length (the number of rows).
        expected: usize,
        /// Actual row length.
        found: usize,
    },
}
