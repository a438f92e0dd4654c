//! Intermediate bot: a fixed priority chain of tactical rules.
//!
//! In order: win, block, center, smart corner, any corner, any cell. Ties
//! inside a rule are broken uniformly at random.

use super::{find_winning_move, no_legal_move, random_move};
use crate::{Board, Cell, EngineError, Move, Square, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Chooses the intermediate bot's move.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMove`] if the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    symbol: Symbol,
    rng: &mut R,
) -> Result<Move, EngineError> {
    if board.is_full() {
        return Err(no_legal_move(symbol));
    }

    // 1. Win
    if let Some(mv) = find_winning_move(board, symbol) {
        debug!(%mv, "Taking immediate win");
        return Ok(mv);
    }

    // 2. Block
    let opponent = symbol.opponent();
    if let Some(threat) = find_winning_move(board, opponent) {
        let mv = Move::at(threat.cell(), symbol);
        debug!(%mv, "Blocking opponent's win");
        return Ok(mv);
    }

    // 3. Center
    if board.is_cell_empty(Cell::CENTER) {
        debug!("Taking center");
        return Ok(Move::at(Cell::CENTER, symbol));
    }

    // 4. Smart corner, 5. any corner
    let open_corners: Vec<Cell> = Cell::CORNERS
        .into_iter()
        .filter(|&corner| board.is_cell_empty(corner))
        .collect();
    let smart_corners = smart_corners(board, symbol, &open_corners);

    if let Some(&corner) = smart_corners.choose(rng) {
        debug!(%corner, "Taking smart corner");
        return Ok(Move::at(corner, symbol));
    }
    if let Some(&corner) = open_corners.choose(rng) {
        debug!(%corner, "Taking remaining corner");
        return Ok(Move::at(corner, symbol));
    }

    // 6. Anything left
    let mv = random_move(board, symbol, rng)?;
    debug!(%mv, "Playing random cell");
    Ok(mv)
}

/// Filters open corners down to the ones that don't set up an opponent fork.
///
/// With the opponent in the center, a corner whose opposite corner is already
/// ours is excluded.
fn smart_corners(board: &Board, symbol: Symbol, open_corners: &[Cell]) -> Vec<Cell> {
    let opponent_holds_center = board.get(Cell::CENTER) == Square::Occupied(symbol.opponent());
    open_corners
        .iter()
        .copied()
        .filter(|&corner| {
            let opposite_is_ours = board.get(corner.opposite()) == Square::Occupied(symbol);
            !(opponent_holds_center && opposite_is_ours)
        })
        .collect()
}
