//! Engine error types.

use crate::types::{Cell, RoundStatus, Symbol};

/// Error that can occur when validating, deciding or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// A coordinate pair falls outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the 3x3 grid")]
    InvalidCoordinates {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {cell} is already occupied")]
    CellOccupied {
        /// The occupied cell.
        cell: Cell,
    },

    /// A bot was asked to move on a board with no empty cell.
    #[display("No legal move left for {symbol}")]
    NoLegalMove {
        /// Symbol of the bot that was asked to move.
        symbol: Symbol,
    },

    /// A move carries a symbol other than the one expected.
    #[display("Expected a move for {expected}, got one for {found}")]
    WrongSymbol {
        /// Symbol whose move was expected.
        expected: Symbol,
        /// Symbol carried by the move.
        found: Symbol,
    },

    /// Human input was offered while a bot holds the turn.
    #[display("It's {symbol}'s turn and {symbol} is not human-controlled")]
    NotHumanTurn {
        /// Symbol of the bot holding the turn.
        symbol: Symbol,
    },

    /// The round already ended.
    #[display("Round is over ({status})")]
    RoundOver {
        /// Final status of the round.
        status: RoundStatus,
    },

    /// The next round was requested before the current one ended.
    #[display("Round is still in progress")]
    RoundInProgress,

    /// A player was seated on the wrong side of the match.
    #[display("Seat {seat} was given a player for {found}")]
    SeatMismatch {
        /// Seat being filled.
        seat: Symbol,
        /// Symbol of the player offered for it.
        found: Symbol,
    },
}
