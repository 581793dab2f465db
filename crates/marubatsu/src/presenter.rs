//! Text rendering of marks, turns, outcomes and boards.
//!
//! Both frontends go through [`Presenter`] so glyphs and result texts come
//! from one place.

use crate::config::{Config, Glyphs, Labels};
use derive_new::new;
use marubatsu_core::{Board, Mark, Outcome};
use unicode_width::UnicodeWidthStr;

/// Placeholder in the win label replaced by the winner's glyph.
const MARK_PLACEHOLDER: &str = "{mark}";

/// Renders core values with configured glyphs and labels.
#[derive(Debug, Clone, Default, new)]
pub struct Presenter {
    glyphs: Glyphs,
    labels: Labels,
}

impl Presenter {
    /// Builds a presenter from the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.glyphs().clone(), config.labels().clone())
    }

    /// Glyph for a mark.
    pub fn glyph(&self, mark: Mark) -> &str {
        match mark {
            Mark::Empty => self.glyphs.empty().as_str(),
            Mark::First => self.glyphs.first().as_str(),
            Mark::Second => self.glyphs.second().as_str(),
        }
    }

    /// Result text: the in-progress label, the win label, or the draw label.
    pub fn outcome_text(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::InProgress => self.labels.in_progress().clone(),
            Outcome::Win(mark) => self.labels.win().replace(MARK_PLACEHOLDER, self.glyph(mark)),
            Outcome::Draw => self.labels.draw().clone(),
        }
    }

    /// Like [`outcome_text`](Self::outcome_text), but never blank.
    pub fn outcome_summary(&self, outcome: Outcome) -> String {
        let text = self.outcome_text(outcome);
        if text.is_empty() {
            "in progress".to_string()
        } else {
            text
        }
    }

    /// Current-turn indicator.
    pub fn turn_text(&self, turn: Mark) -> String {
        format!("turn: {}", self.glyph(turn))
    }

    /// Maps a typed glyph back to a mark.
    ///
    /// Accepts the configured glyphs plus `o`/`O`, `x`/`X` and `.`/`_` for
    /// empty, so boards can be typed on any keyboard.
    pub fn parse_glyph(&self, glyph: &str) -> Option<Mark> {
        if glyph == self.glyphs.first() {
            return Some(Mark::First);
        }
        if glyph == self.glyphs.second() {
            return Some(Mark::Second);
        }
        if glyph == self.glyphs.empty() {
            return Some(Mark::Empty);
        }
        match glyph {
            "o" | "O" => Some(Mark::First),
            "x" | "X" => Some(Mark::Second),
            "." | "_" | " " | "\u{3000}" => Some(Mark::Empty),
            _ => None,
        }
    }

    /// Board as a grid of padded glyphs with row and column headers.
    pub fn board_text(&self, board: &Board) -> String {
        let width = [Mark::Empty, Mark::First, Mark::Second]
            .iter()
            .map(|m| self.glyph(*m).width())
            .max()
            .unwrap_or(1)
            .max(1);

        let header = (0..board.size())
            .map(|c| pad(&c.to_string(), width))
            .collect::<Vec<_>>()
            .join(" ");
        let separator = vec!["-".repeat(width); board.size()].join("+");

        let mut lines = vec![format!("  {header}")];
        for (r, row) in board.rows().enumerate() {
            if r > 0 {
                lines.push(format!("  {separator}"));
            }
            let cells = row
                .iter()
                .map(|m| pad(self.glyph(*m), width))
                .collect::<Vec<_>>()
                .join("|");
            lines.push(format!("{r} {cells}"));
        }
        lines.join("\n")
    }
}

/// Left-aligns `text` in `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
