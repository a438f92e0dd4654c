//! Move-decision engines for bot players.
//!
//! Each strategy is a free function over `(board, symbol, rng)` returning the
//! move to play. They share the helpers in this module: immediate-win search
//! and uniform random play. The random source is always injected so callers
//! can pin outcomes with a seeded generator.

pub mod easy;
pub mod extreme;
pub mod intermediate;

use crate::{Board, EngineError, Move, RoundStatus, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{error, instrument};

/// Returns a copy of `board` with `mv` played on it.
///
/// `mv` must target an empty cell.
pub(crate) fn simulate(board: &Board, mv: Move) -> Board {
    let mut copy = board.clone();
    copy.place(mv.cell(), mv.symbol());
    copy
}

/// Finds a move that wins on the spot for `symbol`.
///
/// Candidates are tried in row-major order and the first winning one is
/// returned.
#[instrument(skip(board))]
pub fn find_winning_move(board: &Board, symbol: Symbol) -> Option<Move> {
    let target = RoundStatus::win_for(symbol);
    board
        .available_moves(symbol)
        .into_iter()
        .find(|&mv| simulate(board, mv).status() == target)
}

/// Picks a uniformly random empty cell for `symbol`.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMove`] if the board is full.
pub(crate) fn random_move<R: Rng + ?Sized>(
    board: &Board,
    symbol: Symbol,
    rng: &mut R,
) -> Result<Move, EngineError> {
    board
        .available_moves(symbol)
        .choose(rng)
        .copied()
        .ok_or_else(|| no_legal_move(symbol))
}

/// Builds the error for a bot asked to move on a full board.
pub(crate) fn no_legal_move(symbol: Symbol) -> EngineError {
    error!(%symbol, "Bot asked to move on a full board");
    EngineError::NoLegalMove { symbol }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{Board, Move, Symbol};

    /// Builds a board from three row strings of `X`, `O` and `.`.
    pub fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let symbol = match ch {
                    'X' => Symbol::X,
                    'O' => Symbol::O,
                    _ => continue,
                };
                board
                    .apply_move(Move::new(row, col, symbol).unwrap())
                    .unwrap();
            }
        }
        board
    }
}
