//! The 3x3 board state machine.

use crate::action::Move;
use crate::error::EngineError;
use crate::rules;
use crate::types::{Cell, RoundStatus, Square, Symbol};
use serde::Serialize;
use tracing::{debug, instrument};

/// 3x3 tris board.
///
/// A square that holds a mark never becomes empty again except through
/// [`Board::reset`]. The round status is always recomputed from the squares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at a cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.row()][cell.col()]
    }

    /// Gets the square at raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinates`] when the cell is off the grid.
    #[instrument(skip(self))]
    pub fn cell(&self, row: usize, col: usize) -> Result<Square, EngineError> {
        Ok(self.get(Cell::new(row, col)?))
    }

    /// Checks if a cell is empty.
    pub fn is_cell_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// All squares, row by row.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }

    /// Places a move if its cell is free.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOccupied`] if the cell already holds a mark;
    /// the board is left untouched.
    #[instrument(skip(self), fields(cell = %mv.cell(), symbol = %mv.symbol()))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), EngineError> {
        if !self.is_cell_empty(mv.cell()) {
            debug!("Rejected move on occupied cell");
            return Err(EngineError::CellOccupied { cell: mv.cell() });
        }
        self.place(mv.cell(), mv.symbol());
        Ok(())
    }

    /// Writes a mark without checking the cell.
    ///
    /// Only used on cells known to be empty.
    pub(crate) fn place(&mut self, cell: Cell, symbol: Symbol) {
        self.squares[cell.row()][cell.col()] = Square::Occupied(symbol);
    }

    /// Computes the round status from the current squares.
    pub fn status(&self) -> RoundStatus {
        if let Some(winner) = rules::check_winner(self) {
            return RoundStatus::win_for(winner);
        }
        if rules::is_full(self) {
            RoundStatus::Draw
        } else {
            RoundStatus::Ongoing
        }
    }

    /// Returns the completed line, if a symbol has three in a row.
    pub fn winning_line(&self) -> Option<[Cell; 3]> {
        rules::winning_line(self)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.is_cell_empty(cell))
            .collect()
    }

    /// Every empty cell paired with `symbol`, in row-major order.
    ///
    /// The result is a snapshot and does not follow later changes to the board.
    pub fn available_moves(&self, symbol: Symbol) -> Vec<Move> {
        self.empty_cells()
            .into_iter()
            .map(|cell| Move::at(cell, symbol))
            .collect()
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|sq| !sq.is_empty())
            .count()
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [[Square::Empty; 3]; 3];
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with keypad numbers (1-9) on empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in Cell::ALL {
            match self.get(cell) {
                Square::Empty => write!(f, "{}", cell.index() + 1)?,
                Square::Occupied(symbol) => write!(f, "{symbol}")?,
            }
            if cell.col() < 2 {
                write!(f, "|")?;
            } else if cell.row() < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
