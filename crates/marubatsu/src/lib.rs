//! Marubatsu - two-player tic-tac-toe in the terminal.
//!
//! Two frontends share one game core ([`marubatsu_core`]):
//!
//! - **TUI**: full-screen grid driven by arrow keys, digits or mouse clicks
//! - **Line**: one command per line, plain text or JSON snapshots
//!
//! Glyphs, result texts and board size come from a TOML [`Config`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod line;
pub mod logging;
mod notation;
mod presenter;
mod tui;

pub use config::{Config, ConfigError, Frontend, Glyphs, Labels};
pub use line::{Command as LineCommand, LineFrontend};
pub use notation::{NotationError, parse_board};
pub use presenter::Presenter;
pub use tui::{App, run_tui};

use marubatsu_core::{EventQueue, Game, GameError};

/// Creates an N×N game with an event queue already subscribed.
pub(crate) fn observed_game(size: usize) -> Result<(Game, EventQueue), GameError> {
    let mut game = Game::with_size(size)?;
    let events = EventQueue::new();
    game.subscribe(events.clone());
    Ok((game, events))
}
