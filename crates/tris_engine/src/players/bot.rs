//! Bot participant and difficulty selection.

use crate::strategy::{easy, extreme, intermediate};
use crate::{Board, EngineError, Move, Symbol};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strength of a bot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Wins when it can, otherwise plays at random.
    Easy,
    /// Wins, blocks, then prefers center and safe corners.
    #[default]
    Intermediate,
    /// Full minimax search; never loses.
    Extreme,
}

impl Difficulty {
    /// Returns display name.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Extreme => "Extreme",
        }
    }
}

/// Automated player driven by one of the strategies.
#[derive(Debug, Clone)]
pub struct BotPlayer {
    symbol: Symbol,
    difficulty: Difficulty,
    rng: StdRng,
}

impl BotPlayer {
    /// Creates a bot seeded from OS entropy.
    pub fn new(symbol: Symbol, difficulty: Difficulty) -> Self {
        Self::with_rng(symbol, difficulty, StdRng::from_os_rng())
    }

    /// Creates a bot with a fixed seed.
    pub fn seeded(symbol: Symbol, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(symbol, difficulty, StdRng::seed_from_u64(seed))
    }

    /// Creates a bot drawing tie-breaks from `rng`.
    pub fn with_rng(symbol: Symbol, difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            symbol,
            difficulty,
            rng,
        }
    }

    /// The symbol this bot places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The strategy this bot runs.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Decides the bot's move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMove`] if the board is full.
    #[instrument(skip(self, board), fields(symbol = %self.symbol, difficulty = %self.difficulty))]
    pub fn decide(&mut self, board: &Board) -> Result<Move, EngineError> {
        let mv = match self.difficulty {
            Difficulty::Easy => easy::choose_move(board, self.symbol, &mut self.rng)?,
            Difficulty::Intermediate => {
                intermediate::choose_move(board, self.symbol, &mut self.rng)?
            }
            Difficulty::Extreme => extreme::choose_move(board, self.symbol, &mut self.rng)?,
        };
        debug!(%mv, "Bot decided");
        Ok(mv)
    }
}
