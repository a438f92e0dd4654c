//! Running score of a match.

use crate::Symbol;
use serde::Serialize;
use tracing::{info, instrument};

/// Wins per symbol across the rounds of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreKeeper {
    wins_x: u32,
    wins_o: u32,
}

impl ScoreKeeper {
    /// Creates a score keeper at 0-0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `symbol`.
    pub fn score(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::X => self.wins_x,
            Symbol::O => self.wins_o,
        }
    }

    /// Records a round won by `symbol`.
    #[instrument(skip(self))]
    pub fn increment(&mut self, symbol: Symbol) {
        let wins = match symbol {
            Symbol::X => &mut self.wins_x,
            Symbol::O => &mut self.wins_o,
        };
        *wins += 1;
        info!(x = self.wins_x, o = self.wins_o, "Score updated");
    }

    /// Puts both counters back to zero.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for ScoreKeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  |  O: {}", self.wins_x, self.wins_o)
    }
}
