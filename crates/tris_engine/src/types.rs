//! Core domain types for tris.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a participant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Player X (starts the first round of a match).
    X,
    /// Player O.
    O,
}

impl Symbol {
    /// Returns the opponent's symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Symbol),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// A validated coordinate on the 3x3 grid.
///
/// Rows and columns are zero-based. Building a cell from raw integers goes
/// through [`Cell::new`], which rejects anything outside the grid, so every
/// `Cell` in circulation indexes the board safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// The center cell.
    pub const CENTER: Cell = Cell { row: 1, col: 1 };

    /// The four corners, row-major.
    pub const CORNERS: [Cell; 4] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 2 },
    ];

    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Creates a cell, rejecting coordinates outside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinates`] if `row` or `col` is not in `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return Err(EngineError::InvalidCoordinates { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Unchecked constructor for literal coordinates known to be in range.
    pub(crate) const fn from_parts(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a cell from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index of this cell (0-8).
    pub fn index(self) -> usize {
        self.row() * Self::SIZE + self.col()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Checks if this cell is one of the four corners.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// The cell mirrored through the center.
    ///
    /// For a corner this is the diagonally opposite corner.
    pub fn opposite(self) -> Self {
        Self {
            row: 2 - self.row,
            col: 2 - self.col,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a round, derived from the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum RoundStatus {
    /// Round still in play.
    #[display("ongoing")]
    Ongoing,
    /// X completed a line.
    #[display("X wins")]
    WinX,
    /// O completed a line.
    #[display("O wins")]
    WinO,
    /// Board full with no line.
    #[display("draw")]
    Draw,
}

impl RoundStatus {
    /// The winning status for `symbol`.
    pub fn win_for(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => RoundStatus::WinX,
            Symbol::O => RoundStatus::WinO,
        }
    }

    /// Returns the winner, if the round was won.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            RoundStatus::WinX => Some(Symbol::X),
            RoundStatus::WinO => Some(Symbol::O),
            RoundStatus::Ongoing | RoundStatus::Draw => None,
        }
    }

    /// Checks if the round is over.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::Ongoing)
    }
}
