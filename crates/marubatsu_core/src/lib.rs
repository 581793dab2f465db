//! Marubatsu core - pure tic-tac-toe game logic.
//!
//! Everything a frontend needs to run a two-player game, with no UI attached.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Outcome`]
//! - **Rules**: [`judge`] evaluates a board into an [`Outcome`]
//! - **State**: [`GameState`] owns the board, turn and outcome, and notifies
//!   [`Observer`]s of turn and outcome changes
//! - **Game**: [`Game::select`] applies one cell selection (place, flip, judge)
//!
//! # Example
//!
//! ```
//! use marubatsu_core::{Cell, EventQueue, Game, GameEvent, Mark, Outcome};
//!
//! let mut game = Game::new();
//! let events = EventQueue::new();
//! game.subscribe(events.clone());
//!
//! game.select(Cell::new(1, 1)).unwrap();
//! assert_eq!(game.state().turn(), Mark::Second);
//! assert_eq!(
//!     events.drain(),
//!     vec![
//!         GameEvent::TurnChanged(Mark::Second),
//!         GameEvent::OutcomeChanged(Outcome::InProgress),
//!     ]
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod events;
mod game;
mod rules;
mod snapshot;
mod state;
mod types;

pub use error::GameError;
pub use events::{EventQueue, GameEvent, Observer, ObserverId};
pub use game::{Game, Selection};
pub use rules::{check_winner, has_line, is_full, judge};
pub use snapshot::Snapshot;
pub use state::GameState;
pub use types::{Board, Cell, DEFAULT_SIZE, MAX_SIZE, Mark, Outcome};
