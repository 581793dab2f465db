//! Change notifications published by [`GameState`](crate::GameState).
//!
//! Delivery is synchronous: observers run inside the mutating call, in
//! registration order, before it returns.

use crate::types::{Mark, Outcome};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A change in game state.
///
/// Placements are not announced on their own; a completed move shows up as
/// `TurnChanged` followed by `OutcomeChanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to this mark.
    #[display("turn changed to {}", _0)]
    TurnChanged(Mark),
    /// The stored outcome was replaced.
    #[display("outcome changed to {:?}", _0)]
    OutcomeChanged(Outcome),
}

/// Receiver of [`GameEvent`]s.
///
/// Implemented for every `FnMut(&GameEvent)` closure.
pub trait Observer {
    /// Called once per emitted event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by [`GameState::subscribe`](crate::GameState::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("observer#{}", _0)]
pub struct ObserverId(pub(crate) usize);

/// Observer that buffers events for the caller to drain later.
///
/// Clones share one buffer: subscribe one clone, keep another to read.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Rc<RefCell<VecDeque<GameEvent>>>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every buffered event, oldest first.
    pub fn drain(&self) -> Vec<GameEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns true if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Observer for EventQueue {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push_back(*event);
    }
}
