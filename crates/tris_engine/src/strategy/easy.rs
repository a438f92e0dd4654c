//! Easy bot: take a win when one is on the board, otherwise play at random.

use super::{find_winning_move, random_move};
use crate::{Board, EngineError, Move, Symbol};
use rand::Rng;
use tracing::{debug, instrument};

/// Chooses the easy bot's move.
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
    if let Some(mv) = find_winning_move(board, symbol) {
        debug!(%mv, "Taking immediate win");
        return Ok(mv);
    }
    let mv = random_move(board, symbol, rng)?;
    debug!(%mv, "Playing random cell");
    Ok(mv)
}
