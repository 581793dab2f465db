//! Application state and logic.

use super::input::{cell_at, digit_cell, move_cursor};
use crate::observed_game;
use crate::presenter::Presenter;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use marubatsu_core::{Cell, EventQueue, Game, GameError, GameEvent, Selection};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// The turn and result lines are updated from game events, not by reading
/// the state after each move.
pub struct App {
    game: Game,
    events: EventQueue,
    presenter: Presenter,
    size: usize,
    cursor: Cell,
    turn_text: String,
    result_text: String,
    status_message: String,
    hit_areas: Vec<(Cell, Rect)>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an N×N game.
    pub fn new(presenter: Presenter, size: usize) -> Result<Self, GameError> {
        let (game, events) = observed_game(size)?;
        let turn_text = presenter.turn_text(game.state().turn());
        let result_text = presenter.outcome_text(game.state().outcome());
        Ok(Self {
            game,
            events,
            presenter,
            size,
            cursor: Cell::new(size / 2, size / 2),
            turn_text,
            result_text,
            status_message: "Arrows/click to pick a cell, Enter to play, r restart, q quit"
                .to_string(),
            hit_areas: Vec::new(),
            should_quit: false,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the presenter used for glyphs and texts.
    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Gets the current-turn line.
    pub fn turn_text(&self) -> &str {
        &self.turn_text
    }

    /// Gets the result line.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_hit_areas(&mut self, hit_areas: Vec<(Cell, Rect)>) {
        self.hit_areas = hit_areas;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            code => {
                if let Some(cell) = digit_cell(code, self.size) {
                    self.cursor = cell;
                    self.select(cell);
                } else {
                    self.cursor = move_cursor(self.cursor, code, self.size);
                }
            }
        }
    }

    /// Handles a mouse event; a left click on a cell selects it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(cell) = cell_at(&self.hit_areas, mouse.column, mouse.row) {
            debug!(%cell, "Cell clicked");
            self.cursor = cell;
            self.select(cell);
        }
    }

    /// Forwards a selection to the game unless the game is over.
    #[instrument(skip(self))]
    pub fn select(&mut self, cell: Cell) {
        if self.game.state().outcome().is_over() {
            self.status_message = "Game over. Press 'r' to restart or 'q' to quit.".to_string();
            return;
        }
        match self.game.select(cell) {
            Ok(Selection::Played { mark, .. }) => {
                self.status_message = format!("{} played {}", self.presenter.glyph(mark), cell);
            }
            Ok(Selection::Ignored { .. }) => {
                debug!("Occupied cell selected");
            }
            Err(e) => {
                warn!(error = %e, "Selection rejected");
                self.status_message = format!("Move error: {}", e);
            }
        }
        self.apply_events();
    }

    /// Restarts with a fresh game of the same size.
    ///
    /// If the new game cannot be built the current one keeps running.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        let (game, events) = match observed_game(self.size) {
            Ok(fresh) => fresh,
            Err(e) => {
                warn!(error = %e, "Restart failed");
                return;
            }
        };
        self.game = game;
        self.events = events;
        self.turn_text = self.presenter.turn_text(self.game.state().turn());
        self.result_text = self.presenter.outcome_text(self.game.state().outcome());
        self.status_message = "Game restarted.".to_string();
    }

    fn apply_events(&mut self) {
        for event in self.events.drain() {
            debug!(%event, "Handling game event");
            match event {
                GameEvent::TurnChanged(turn) => {
                    self.turn_text = self.presenter.turn_text(turn);
                }
                GameEvent::OutcomeChanged(outcome) => {
                    self.result_text = self.presenter.outcome_text(outcome);
                    if outcome.is_over() {
                        self.status_message =
                            "Game over. Press 'r' to restart or 'q' to quit.".to_string();
                    }
                }
            }
        }
    }
}
