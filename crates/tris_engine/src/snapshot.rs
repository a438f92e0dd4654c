//! Read-only view of a match for front ends.

use crate::{Game, Mode, RoundStatus, ScoreKeeper, Square, Symbol};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a front end needs to draw the match, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MatchSnapshot {
    /// Board marks, `[row][col]`, `None` for empty squares.
    board: [[Option<Symbol>; 3]; 3],
    /// Status of the round on the board.
    status: RoundStatus,
    /// Symbol whose turn it is (the last mover once the round is over).
    current: Symbol,
    /// Symbol that opened the current round.
    round_starter: Symbol,
    /// Whether the player to move is human-controlled.
    awaiting_human: bool,
    /// Running score.
    scores: ScoreKeeper,
    /// Match mode.
    mode: Mode,
}

impl MatchSnapshot {
    pub(crate) fn capture(game: &Game) -> Self {
        let rows = *game.board().rows();
        let board = rows.map(|row| row.map(Square::symbol));
        let status = game.status();
        Self {
            board,
            status,
            current: game.current_symbol(),
            round_starter: game.round_starter(),
            awaiting_human: !status.is_terminal() && game.current_player().is_human(),
            scores: *game.scores(),
            mode: game.mode(),
        }
    }
}
