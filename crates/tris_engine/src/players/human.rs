//! Human participant fed by an external front end.

use crate::{EngineError, Move, Symbol};
use tracing::{debug, instrument};

/// Input slot of a human participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HumanInput {
    /// No move has been supplied yet.
    #[default]
    AwaitingInput,
    /// A move is queued for the next decision.
    MoveReady(Move),
}

/// Human player whose moves arrive from outside the engine.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    symbol: Symbol,
    input: HumanInput,
}

impl HumanPlayer {
    /// Creates a human player awaiting input.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            input: HumanInput::AwaitingInput,
        }
    }

    /// The symbol this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Current state of the input slot.
    pub fn input(&self) -> HumanInput {
        self.input
    }

    /// Checks if a move is queued.
    pub fn is_ready(&self) -> bool {
        matches!(self.input, HumanInput::MoveReady(_))
    }

    /// Queues a move, replacing any move queued earlier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::WrongSymbol`] if the move is for the other symbol.
    #[instrument(skip(self), fields(symbol = %self.symbol))]
    pub fn submit(&mut self, mv: Move) -> Result<(), EngineError> {
        if mv.symbol() != self.symbol {
            return Err(EngineError::WrongSymbol {
                expected: self.symbol,
                found: mv.symbol(),
            });
        }
        if let HumanInput::MoveReady(previous) = self.input {
            debug!(%previous, "Replacing queued move");
        }
        self.input = HumanInput::MoveReady(mv);
        Ok(())
    }

    /// Takes the queued move, leaving the slot awaiting input.
    pub fn take(&mut self) -> Option<Move> {
        match std::mem::take(&mut self.input) {
            HumanInput::MoveReady(mv) => Some(mv),
            HumanInput::AwaitingInput => None,
        }
    }
}
