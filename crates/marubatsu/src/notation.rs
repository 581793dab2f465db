//! Parsing boards typed as text, one row per line.

use crate::presenter::Presenter;
use derive_more::{Display, Error};
use marubatsu_core::{Board, GameError, Mark};
use tracing::instrument;

/// Failure to read a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NotationError {
    /// A character is not a known glyph.
    #[display("Unknown glyph {:?} at row {}, column {}", glyph, row, col)]
    UnknownGlyph {
        /// The unrecognized text.
        glyph: String,
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },

    /// The rows do not form a square board.
    #[display("{}", _0)]
    Shape(GameError),
}

impl From<GameError> for NotationError {
    fn from(err: GameError) -> Self {
        Self::Shape(err)
    }
}

/// Parses rows such as `"o.x"` or `"○ ×"` into a board.
///
/// Each character is one cell, and spaces count as empty cells, so a row
/// ending in a blank cell keeps its trailing space. Only line terminators
/// are stripped. Empty lines are skipped.
#[instrument(skip(presenter, rows))]
pub fn parse_board<S: AsRef<str>>(
    presenter: &Presenter,
    rows: &[S],
) -> Result<Board, NotationError> {
    let mut marks = Vec::new();
    for line in rows {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }
        let row = marks.len();
        let parsed = line
            .chars()
            .enumerate()
            .map(|(col, ch)| {
                let glyph = ch.to_string();
                presenter
                    .parse_glyph(&glyph)
                    .ok_or_else(|| NotationError::UnknownGlyph { glyph, row, col })
            })
            .collect::<Result<Vec<Mark>, _>>()?;
        marks.push(parsed);
    }
    Ok(Board::from_rows(marks)?)
}
