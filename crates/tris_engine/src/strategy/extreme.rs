//! Extreme bot: exhaustive minimax search.
//!
//! The whole game tree below the current position is searched, with no
//! pruning and no depth limit; a 3x3 board has at most nine plies. Scores are
//! taken from the searching bot's own point of view, so the same code plays
//! either symbol.

use super::{no_legal_move, simulate};
use crate::{Board, EngineError, Move, RoundStatus, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Score of a position the bot has won.
pub const WIN: i8 = 1;
/// Score of a position the bot has lost.
pub const LOSS: i8 = -1;
/// Score of a drawn position.
pub const DRAW: i8 = 0;

/// Chooses the extreme bot's move.
///
/// Every legal move is scored with [`minimax`]; the move is drawn uniformly
/// from those tied at the best score.
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
    let scored = score_moves(board, symbol);
    let Some(best) = scored.iter().map(|&(_, score)| score).max() else {
        return Err(no_legal_move(symbol));
    };

    let best_moves: Vec<Move> = scored
        .into_iter()
        .filter(|&(_, score)| score == best)
        .map(|(mv, _)| mv)
        .collect();
    debug!(best, candidates = best_moves.len(), "Minimax search complete");

    best_moves
        .choose(rng)
        .copied()
        .ok_or_else(|| no_legal_move(symbol))
}

/// Scores every legal move for `symbol` with a full minimax search.
///
/// Moves come back in row-major order alongside their value to `symbol`:
/// [`WIN`], [`DRAW`] or [`LOSS`] under perfect play from both sides.
pub fn score_moves(board: &Board, symbol: Symbol) -> Vec<(Move, i8)> {
    board
        .available_moves(symbol)
        .into_iter()
        .map(|mv| (mv, minimax(&simulate(board, mv), symbol, false)))
        .collect()
}

/// Value of `board` for `me`, with `maximizing` telling whose turn it is.
///
/// On a maximizing layer `me` moves and the best child is kept; on a
/// minimizing layer the opponent moves and the worst child is kept.
pub fn minimax(board: &Board, me: Symbol, maximizing: bool) -> i8 {
    match board.status() {
        RoundStatus::Draw => return DRAW,
        RoundStatus::Ongoing => {}
        won => {
            return if won.winner() == Some(me) { WIN } else { LOSS };
        }
    }

    let mover = if maximizing { me } else { me.opponent() };
    let children = board
        .available_moves(mover)
        .into_iter()
        .map(|mv| minimax(&simulate(board, mv), me, !maximizing));

    if maximizing {
        children.max().unwrap_or(DRAW)
    } else {
        children.min().unwrap_or(DRAW)
    }
}
