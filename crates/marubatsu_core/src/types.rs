//! Core domain types for marubatsu.

use crate::error::GameError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board dimension used when none is configured.
pub const DEFAULT_SIZE: usize = 3;

/// Largest supported board dimension.
pub const MAX_SIZE: usize = u8::MAX as usize;

/// Content of a cell, and the turn indicator.
///
/// As a turn indicator a mark is never [`Mark::Empty`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    #[display(" ")]
    Empty,
    /// First player (moves first).
    #[display("○")]
    First,
    /// Second player.
    #[display("×")]
    Second,
}

impl Mark {
    /// Returns the other player's mark. `Empty` stays `Empty`.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Returns true for `First` and `Second`.
    pub fn is_player(&self) -> bool {
        !matches!(self, Mark::Empty)
    }
}

/// A `(row, col)` coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({row}, {col})")]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Cell {
    /// Creates a new cell coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Square N×N board of marks.
///
/// The only mutation path is [`Board::place`], which is crate-private;
/// outside the crate a board can be read or built whole, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Dimension N.
    size: usize,
    /// Cells in row-major order (N*N).
    cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let len = cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![Mark::Empty; len],
        })
    }

    /// Builds a board from rows of marks.
    ///
    /// The number of rows defines N and every row must have N cells.
    /// No legality check is made: any mix of marks is accepted.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Result<Self, GameError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(cell_count(size)?);
        for (row, marks) in rows.into_iter().enumerate() {
            if marks.len() != size {
                return Err(GameError::NotSquare {
                    row,
                    expected: size,
                    found: marks.len(),
                });
            }
            cells.extend(marks);
        }
        Ok(Self { size, cells })
    }

    /// Returns the dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether the cell lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Gets the mark at the given cell, or `None` if it is off the board.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Mark::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size)
    }

    /// Returns the coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Empty)
            .map(|(i, _)| Cell::new(i / self.size, i % self.size))
            .collect()
    }

    /// Writes a mark into a cell.
    ///
    /// Callers must have checked that the cell is empty.
    pub(crate) fn place(&mut self, cell: Cell, mark: Mark) -> Result<(), GameError> {
        let i = self.index(cell).ok_or(GameError::OutOfBounds {
            cell,
            size: self.size,
        })?;
        self.cells[i] = mark;
        Ok(())
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.size + cell.col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Mark::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

/// Number of cells in an N×N board, if N is within `1..=MAX_SIZE`.
fn cell_count(size: usize) -> Result<usize, GameError> {
    if size == 0 || size > MAX_SIZE {
        return Err(GameError::InvalidSize(size));
    }
    size.checked_mul(size).ok_or(GameError::InvalidSize(size))
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty cell.
    #[default]
    InProgress,
    /// The mark completed a line.
    Win(Mark),
    /// Board full without a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => Ok(()),
            Outcome::Win(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
