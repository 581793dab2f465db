//! Game rules for marubatsu.
//!
//! Pure functions over a [`Board`]. Rules are separated from board storage
//! so they can judge any board, including ones no legal game could reach.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, has_line};

use crate::types::{Board, Outcome};
use tracing::{instrument, trace};

/// Evaluates a board into an [`Outcome`].
///
/// Winning lines are checked before fullness, so a full board with a line
/// is a win, not a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn judge(board: &Board) -> Outcome {
    let outcome = if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    trace!(?outcome, "Board judged");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    const E: Mark = Mark::Empty;
    const O: Mark = Mark::First;
    const X: Mark = Mark::Second;

    fn board(rows: [[Mark; 3]; 3]) -> Board {
        Board::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(judge(&Board::default()), Outcome::InProgress);
    }

    #[test]
    fn test_single_mark_in_progress() {
        let b = board([[E, E, E], [E, X, E], [E, E, E]]);
        assert_eq!(judge(&b), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board([[O, X, O], [O, X, X], [X, O, O]]);
        assert_eq!(judge(&b), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let b = board([[O, O, O], [X, X, O], [X, O, X]]);
        assert_eq!(judge(&b), Outcome::Win(O));
    }

    #[test]
    fn test_every_row_column_and_diagonal() {
        for mark in [O, X] {
            for i in 0..3 {
                let mut row = [[E; 3]; 3];
                row[i] = [mark; 3];
                assert_eq!(judge(&board(row)), Outcome::Win(mark), "row {i}");

                let mut col = [[E; 3]; 3];
                for r in col.iter_mut() {
                    r[i] = mark;
                }
                assert_eq!(judge(&board(col)), Outcome::Win(mark), "column {i}");
            }
            let diag = board([[mark, E, E], [E, mark, E], [E, E, mark]]);
            assert_eq!(judge(&diag), Outcome::Win(mark));
            let anti = board([[E, E, mark], [E, mark, E], [mark, E, E]]);
            assert_eq!(judge(&anti), Outcome::Win(mark));
        }
    }

    #[test]
    fn test_first_wins_simultaneous_lines() {
        // Unreachable in legal play: both marks hold a full row.
        let b = board([[X, X, X], [E, E, E], [O, O, O]]);
        assert_eq!(judge(&b), Outcome::Win(O));
    }

    #[test]
    fn test_judge_is_pure() {
        let b = board([[O, E, X], [E, O, E], [X, E, E]]);
        let before = b.clone();
        assert_eq!(judge(&b), judge(&b));
        assert_eq!(b, before);
    }

    #[test]
    fn test_larger_board() {
        let mut rows = vec![vec![E; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            row[3 - r] = X;
        }
        let b = Board::from_rows(rows).unwrap();
        assert_eq!(judge(&b), Outcome::Win(X));
    }

    #[test]
    fn test_one_by_one_board() {
        let b = Board::from_rows(vec![vec![X]]).unwrap();
        assert_eq!(judge(&b), Outcome::Win(X));
        assert_eq!(judge(&Board::new(1).unwrap()), Outcome::InProgress);
    }
}
