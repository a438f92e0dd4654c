//! Win detection logic for tris.

use crate::{Board, Cell, Symbol};
use tracing::instrument;

const fn cell(row: u8, col: u8) -> Cell {
    Cell::from_parts(row, col)
}

/// The eight lines of three, in evaluation order.
///
/// Rows come first, then columns, then the two diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [cell(0, 0), cell(0, 1), cell(0, 2)],
    [cell(1, 0), cell(1, 1), cell(1, 2)],
    [cell(2, 0), cell(2, 1), cell(2, 2)],
    // Columns
    [cell(0, 0), cell(1, 0), cell(2, 0)],
    [cell(0, 1), cell(1, 1), cell(2, 1)],
    [cell(0, 2), cell(1, 2), cell(2, 2)],
    // Diagonals
    [cell(0, 0), cell(1, 1), cell(2, 2)],
    [cell(0, 2), cell(1, 1), cell(2, 0)],
];

/// Returns the first completed line on the board, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Cell; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        !sq.is_empty() && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` if that symbol has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).symbol())
}
