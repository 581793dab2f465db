//! Line-oriented frontend: one command per line on stdin, text on stdout.

use crate::observed_game;
use crate::presenter::Presenter;
use anyhow::Result;
use marubatsu_core::{Cell, EventQueue, Game, GameError, GameEvent, Selection};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "commands: <row> <col> | new | help | quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select the cell at `(row, col)`.
    Select(Cell),
    /// Start a fresh game.
    New,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses `"1 2"`, `"1,2"`, `"new"`, `"help"`, `"quit"` and friends.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => return Command::Nothing,
            "new" | "n" => return Command::New,
            "help" | "h" | "?" => return Command::Help,
            "quit" | "q" | "exit" => return Command::Quit,
            _ => {}
        }
        let parts: Vec<_> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Command::Select(Cell::new(row, col)),
                _ => Command::Unknown(line.to_string()),
            },
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Plays games over a pair of text streams.
pub struct LineFrontend<R, W> {
    input: R,
    output: W,
    presenter: Presenter,
    size: usize,
    json: bool,
    game: Game,
    events: EventQueue,
}

impl<R: BufRead, W: Write> LineFrontend<R, W> {
    /// Creates a frontend with a fresh N×N game.
    ///
    /// With `json` set, every accepted move prints a JSON snapshot line
    /// instead of the text board.
    pub fn new(
        input: R,
        output: W,
        presenter: Presenter,
        size: usize,
        json: bool,
    ) -> Result<Self, GameError> {
        let (game, events) = observed_game(size)?;
        Ok(Self {
            input,
            output,
            presenter,
            size,
            json,
            game,
            events,
        })
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self), fields(size = self.size, json = self.json))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting line frontend");
        self.show_start()?;

        let mut line = String::new();
        loop {
            if !self.json {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            match Command::parse(&line) {
                Command::Select(cell) => self.select(cell)?,
                Command::New => {
                    let (game, events) = observed_game(self.size)?;
                    self.game = game;
                    self.events = events;
                    info!("New game");
                    self.show_start()?;
                }
                Command::Help => writeln!(self.output, "{HELP}")?,
                Command::Quit => break,
                Command::Nothing => {}
                Command::Unknown(text) => {
                    writeln!(self.output, "unknown command {text:?}; {HELP}")?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn select(&mut self, cell: Cell) -> Result<()> {
        if self.game.state().outcome().is_over() {
            writeln!(self.output, "game over; type 'new' to play again")?;
            return Ok(());
        }
        match self.game.select(cell) {
            Ok(Selection::Played { .. }) => self.show_move(),
            Ok(Selection::Ignored { cell }) => {
                writeln!(self.output, "cell {cell} is taken")?;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Selection rejected");
                writeln!(self.output, "{e}")?;
                Ok(())
            }
        }
    }

    fn show_start(&mut self) -> Result<()> {
        if self.json {
            return self.show_snapshot();
        }
        let board = self.presenter.board_text(self.game.state().board());
        let turn = self.presenter.turn_text(self.game.state().turn());
        writeln!(self.output, "{board}\n{turn}\n{HELP}")?;
        Ok(())
    }

    fn show_move(&mut self) -> Result<()> {
        // Drain even in JSON mode so the queue does not grow.
        let events = self.events.drain();
        if self.json {
            return self.show_snapshot();
        }
        writeln!(
            self.output,
            "{}",
            self.presenter.board_text(self.game.state().board())
        )?;
        for event in events {
            match event {
                GameEvent::TurnChanged(turn) => {
                    writeln!(self.output, "{}", self.presenter.turn_text(turn))?;
                }
                GameEvent::OutcomeChanged(outcome) if outcome.is_over() => {
                    writeln!(self.output, "{}", self.presenter.outcome_text(outcome))?;
                }
                GameEvent::OutcomeChanged(_) => {}
            }
        }
        Ok(())
    }

    fn show_snapshot(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.game.state().snapshot())?;
        writeln!(self.output, "{json}")?;
        Ok(())
    }
}
