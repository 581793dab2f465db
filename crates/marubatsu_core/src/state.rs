//! Observable game state.

use crate::error::GameError;
use crate::events::{GameEvent, Observer, ObserverId};
use crate::snapshot::Snapshot;
use crate::types::{Board, Cell, Mark, Outcome};
use tracing::{debug, instrument};

/// Board, turn and outcome of one game session.
///
/// Mutated only through [`place_mark`](Self::place_mark),
/// [`flip_turn`](Self::flip_turn) and [`set_outcome`](Self::set_outcome).
/// Turn and outcome changes are published to subscribed observers;
/// placements and reads are silent. A new game is a new `GameState`.
pub struct GameState {
    board: Board,
    turn: Mark,
    outcome: Outcome,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_observer: usize,
}

impl GameState {
    /// Creates a game on an empty 3x3 board, `First` to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// Creates a game on an empty N×N board.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            turn: Mark::First,
            outcome: Outcome::InProgress,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the last stored outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Places the current turn's mark into `cell`.
    ///
    /// Returns `Ok(true)` if the mark was placed and `Ok(false)` if the
    /// cell was already occupied, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the cell is off the board.
    #[instrument(skip(self), fields(%cell, turn = ?self.turn))]
    pub fn place_mark(&mut self, cell: Cell) -> Result<bool, GameError> {
        match self.board.get(cell) {
            None => Err(GameError::OutOfBounds {
                cell,
                size: self.board.size(),
            }),
            Some(Mark::Empty) => {
                self.board.place(cell, self.turn)?;
                debug!("Mark placed");
                Ok(true)
            }
            Some(occupant) => {
                debug!(?occupant, "Cell occupied, placement ignored");
                Ok(false)
            }
        }
    }

    /// Passes the turn to the other player and returns the new turn.
    #[instrument(skip(self), fields(from = ?self.turn))]
    pub fn flip_turn(&mut self) -> Mark {
        self.turn = self.turn.opponent();
        debug!(to = ?self.turn, "Turn flipped");
        self.emit(GameEvent::TurnChanged(self.turn));
        self.turn
    }

    /// Stores the outcome and publishes it.
    #[instrument(skip(self))]
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.emit(GameEvent::OutcomeChanged(outcome));
    }

    /// Registers an observer for turn and outcome changes.
    #[instrument(skip(self, observer))]
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(%id, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Captures a serializable copy of the board, turn and outcome.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board, self.turn, self.outcome)
    }

    fn emit(&mut self, event: GameEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("outcome", &self.outcome)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventQueue;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Mark::First);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.board(), &Board::default());
    }

    #[test]
    fn test_place_mark_changes_only_target() {
        let mut state = GameState::new();
        assert_eq!(state.place_mark(Cell::new(2, 1)), Ok(true));

        for (i, mark) in state.board().cells().iter().enumerate() {
            let expected = if i == 7 { Mark::First } else { Mark::Empty };
            assert_eq!(*mark, expected, "cell {i}");
        }
        // Placement does not flip the turn.
        assert_eq!(state.turn(), Mark::First);
    }

    #[test]
    fn test_place_mark_on_occupied_is_noop() {
        let mut state = GameState::new();
        let events = EventQueue::new();
        state.place_mark(Cell::new(0, 0)).unwrap();
        state.flip_turn();
        state.subscribe(events.clone());

        let board = state.board().clone();
        assert_eq!(state.place_mark(Cell::new(0, 0)), Ok(false));
        assert_eq!(state.board(), &board);
        assert_eq!(state.board().get(Cell::new(0, 0)), Some(Mark::First));
        assert_eq!(state.turn(), Mark::Second);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(events.is_empty());
    }

    #[test]
    fn test_place_mark_out_of_bounds() {
        let mut state = GameState::new();
        let err = state.place_mark(Cell::new(3, 3)).unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds { size: 3, .. }));
        assert_eq!(state.board(), &Board::default());
    }

    #[test]
    fn test_flip_turn_twice_is_identity() {
        let mut state = GameState::new();
        assert_eq!(state.flip_turn(), Mark::Second);
        assert_eq!(state.flip_turn(), Mark::First);
    }

    #[test]
    fn test_notifications_in_order() {
        let mut state = GameState::new();
        let events = EventQueue::new();
        state.subscribe(events.clone());

        state.flip_turn();
        state.set_outcome(Outcome::Draw);

        assert_eq!(
            events.drain(),
            vec![
                GameEvent::TurnChanged(Mark::Second),
                GameEvent::OutcomeChanged(Outcome::Draw),
            ]
        );
        assert_eq!(state.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_every_observer_notified() {
        let mut state = GameState::new();
        let a = EventQueue::new();
        let b = EventQueue::new();
        state.subscribe(a.clone());
        state.subscribe(b.clone());

        state.flip_turn();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut state = GameState::new();
        let events = EventQueue::new();
        let id = state.subscribe(events.clone());

        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        assert_eq!(state.observer_count(), 0);

        state.flip_turn();
        assert!(events.is_empty());
    }

    #[test]
    fn test_reads_are_silent() {
        let mut state = GameState::new();
        let events = EventQueue::new();
        state.subscribe(events.clone());

        let _ = state.board();
        let _ = state.turn();
        let _ = state.outcome();
        let _ = state.snapshot();
        assert!(events.is_empty());
    }
}
