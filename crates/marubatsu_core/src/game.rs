//! Per-move orchestration.

use crate::error::GameError;
use crate::events::{Observer, ObserverId};
use crate::rules::judge;
use crate::state::GameState;
use crate::types::{Cell, Mark, Outcome};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// What a cell selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Selection {
    /// The cell was occupied; nothing changed and nothing was published.
    #[display("{} ignored", cell)]
    Ignored {
        /// The selected cell.
        cell: Cell,
    },
    /// A mark was placed and the board re-judged.
    #[display("{} played {}", mark, cell)]
    Played {
        /// The selected cell.
        cell: Cell,
        /// The mark placed there.
        mark: Mark,
        /// Outcome after the move.
        outcome: Outcome,
    },
}

/// Tic-tac-toe game: a [`GameState`] plus the rule for applying a move.
///
/// Moves are not blocked once the game is won or drawn; frontends decide
/// whether to keep forwarding selections.
#[derive(Debug, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new 3x3 game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Creates a new N×N game.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::with_size(size)?,
        })
    }

    /// Wraps an existing state.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a mutable reference to the game state.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Unwraps the game state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Registers an observer on the underlying state.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> ObserverId {
        self.state.subscribe(observer)
    }

    /// Applies one cell selection.
    ///
    /// An occupied cell is ignored. Otherwise the current mark is placed,
    /// the turn flips, and the board is judged and the outcome stored. The
    /// outcome describes the move just made while the turn already names
    /// the next player, even when the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the cell is off the board.
    #[instrument(skip(self), fields(%cell))]
    pub fn select(&mut self, cell: Cell) -> Result<Selection, GameError> {
        let mark = self.state.turn();
        if !self.state.place_mark(cell)? {
            debug!("Selection ignored");
            return Ok(Selection::Ignored { cell });
        }

        self.state.flip_turn();
        let outcome = judge(self.state.board());
        self.state.set_outcome(outcome);

        if outcome.is_over() {
            info!(?outcome, "Game over");
        }
        Ok(Selection::Played {
            cell,
            mark,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventQueue, GameEvent};

    #[test]
    fn test_select_places_flips_and_judges() {
        let mut game = Game::new();
        let selection = game.select(Cell::new(1, 1)).unwrap();

        assert_eq!(
            selection,
            Selection::Played {
                cell: Cell::new(1, 1),
                mark: Mark::First,
                outcome: Outcome::InProgress,
            }
        );
        assert_eq!(game.state().board().get(Cell::new(1, 1)), Some(Mark::First));
        assert_eq!(game.state().turn(), Mark::Second);
    }

    #[test]
    fn test_select_occupied_ignored() {
        let mut game = Game::new();
        let events = EventQueue::new();
        game.select(Cell::new(0, 0)).unwrap();
        game.subscribe(events.clone());

        let selection = game.select(Cell::new(0, 0)).unwrap();
        assert_eq!(selection, Selection::Ignored { cell: Cell::new(0, 0) });
        assert_eq!(game.state().turn(), Mark::Second);
        assert_eq!(game.state().board().get(Cell::new(0, 0)), Some(Mark::First));
        assert!(events.is_empty());
    }

    #[test]
    fn test_select_out_of_bounds() {
        let mut game = Game::new();
        assert!(game.select(Cell::new(0, 3)).is_err());
        assert_eq!(game.state().turn(), Mark::First);
    }

    #[test]
    fn test_turn_event_precedes_outcome_event() {
        let mut game = Game::new();
        let events = EventQueue::new();
        game.subscribe(events.clone());

        game.select(Cell::new(2, 2)).unwrap();
        assert_eq!(
            events.drain(),
            vec![
                GameEvent::TurnChanged(Mark::Second),
                GameEvent::OutcomeChanged(Outcome::InProgress),
            ]
        );
    }

    #[test]
    fn test_turn_flips_even_on_winning_move() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.select(Cell::new(row, col)).unwrap();
        }
        let selection = game.select(Cell::new(0, 2)).unwrap();
        assert_eq!(selection.to_string(), "○ played (0, 2)");
        assert_eq!(game.state().outcome(), Outcome::Win(Mark::First));
        assert_eq!(game.state().turn(), Mark::Second);
    }

    #[test]
    fn test_moves_after_game_over_are_accepted() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.select(Cell::new(row, col)).unwrap();
        }
        let selection = game.select(Cell::new(2, 2)).unwrap();
        assert!(matches!(selection, Selection::Played { mark: Mark::Second, .. }));
        assert_eq!(game.state().outcome(), Outcome::Win(Mark::First));
    }
}
