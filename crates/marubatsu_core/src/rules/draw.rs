//! Draw detection logic for marubatsu.

use crate::types::{Board, Mark};
use tracing::instrument;

/// Checks if the board is full (no empty cell).
///
/// A full board with no winner is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(Mark::is_player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::default()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::default();
        board.place(Cell::new(1, 1), Mark::First).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for cell in Board::default().empty_cells() {
            board.place(cell, Mark::Second).unwrap();
        }
        assert!(is_full(&board));
    }
}
