//! First-class move type for tris.
//!
//! Moves are domain events, not side effects. They carry a validated cell
//! and the mark to place there, and are checked against the board only
//! when applied.

use crate::error::EngineError;
use crate::types::{Cell, Symbol};
use serde::Serialize;
use tracing::instrument;

/// A move: a symbol placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    cell: Cell,
    symbol: Symbol,
}

impl Move {
    /// Creates a move from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinates`] when the cell is off the grid.
    #[instrument]
    pub fn new(row: usize, col: usize, symbol: Symbol) -> Result<Self, EngineError> {
        Ok(Self::at(Cell::new(row, col)?, symbol))
    }

    /// Creates a move on an already validated cell.
    pub fn at(cell: Cell, symbol: Symbol) -> Self {
        Self { cell, symbol }
    }

    /// The target cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Zero-based row of the target cell.
    pub fn row(&self) -> usize {
        self.cell.row()
    }

    /// Zero-based column of the target cell.
    pub fn col(&self) -> usize {
        self.cell.col()
    }

    /// The mark being placed.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.cell)
    }
}
