//! Win detection logic for marubatsu.

use crate::types::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Every line of `First` is checked before any line of `Second`, so a board
/// where both hold a full line reports `First`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    Mark::iter()
        .filter(Mark::is_player)
        .find(|mark| has_line(board, *mark))
}

/// Checks whether `mark` fills a row, a column or either diagonal.
///
/// Order: rows, columns, main diagonal, anti-diagonal.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let n = board.size();

    (0..n).any(|r| filled(board, mark, (0..n).map(|c| Cell::new(r, c))))
        || (0..n).any(|c| filled(board, mark, (0..n).map(|r| Cell::new(r, c))))
        || filled(board, mark, (0..n).map(|i| Cell::new(i, i)))
        || filled(board, mark, (0..n).map(|i| Cell::new(i, n - 1 - i)))
}

fn filled(board: &Board, mark: Mark, mut line: impl Iterator<Item = Cell>) -> bool {
    line.all(|cell| board.get(cell) == Some(mark))
}
