//! Tests for judging boards typed as text.

use marubatsu::{NotationError, Presenter, parse_board};
use marubatsu_core::{Mark, Outcome, judge};

fn judge_rows(rows: &[&str]) -> String {
    let presenter = Presenter::default();
    let board = parse_board(&presenter, rows).expect("valid board");
    presenter.outcome_summary(judge(&board))
}

#[test]
fn test_judge_texts() {
    assert_eq!(judge_rows(&["...", "...", "..."]), "in progress");
    assert_eq!(judge_rows(&["xxx", "oo.", "o.."]), "× wins");
    assert_eq!(judge_rows(&["oxo", "oxx", "xoo"]), "draw");
}

#[test]
fn test_dual_win_reports_first() {
    let presenter = Presenter::default();
    let board = parse_board(&presenter, &["xxx", "...", "ooo"]).expect("valid board");
    assert_eq!(judge(&board), Outcome::Win(Mark::First));
}

#[test]
fn test_bad_input() {
    let presenter = Presenter::default();
    assert!(matches!(
        parse_board(&presenter, &["ox", "o"]),
        Err(NotationError::Shape(_))
    ));
    assert!(matches!(
        parse_board(&presenter, &["?"]),
        Err(NotationError::UnknownGlyph { .. })
    ));
}
