//! Match participants.
//!
//! A participant is either a human fed through the write channel or a bot
//! running one of the strategies. The set is closed: adding a participant kind
//! means adding a variant and handling it everywhere.

mod bot;
mod human;

pub use bot::{BotPlayer, Difficulty};
pub use human::{HumanInput, HumanPlayer};

use crate::{Board, EngineError, Move, Symbol};
use tracing::instrument;

/// Outcome of asking a participant for its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The participant has a move to play.
    Move(Move),
    /// A human participant has not queued a move yet.
    Pending,
}

/// A participant seated at a match.
#[derive(Debug, Clone)]
pub enum Player {
    /// Externally fed participant.
    Human(HumanPlayer),
    /// Automated participant.
    Bot(BotPlayer),
}

impl Player {
    /// Creates a human participant.
    pub fn human(symbol: Symbol) -> Self {
        Player::Human(HumanPlayer::new(symbol))
    }

    /// Creates a bot seeded from OS entropy.
    pub fn bot(symbol: Symbol, difficulty: Difficulty) -> Self {
        Player::Bot(BotPlayer::new(symbol, difficulty))
    }

    /// Creates a bot whose random choices are reproducible.
    pub fn seeded_bot(symbol: Symbol, difficulty: Difficulty, seed: u64) -> Self {
        Player::Bot(BotPlayer::seeded(symbol, difficulty, seed))
    }

    /// The symbol this participant plays for its whole life.
    pub fn symbol(&self) -> Symbol {
        match self {
            Player::Human(human) => human.symbol(),
            Player::Bot(bot) => bot.symbol(),
        }
    }

    /// Checks if this participant is human-controlled.
    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human(_))
    }

    /// Bot difficulty, if this participant is a bot.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            Player::Human(_) => None,
            Player::Bot(bot) => Some(bot.difficulty()),
        }
    }

    /// Mutable access to the human input slot, if this participant is human.
    pub fn as_human_mut(&mut self) -> Option<&mut HumanPlayer> {
        match self {
            Player::Human(human) => Some(human),
            Player::Bot(_) => None,
        }
    }

    /// Asks the participant for its next move.
    ///
    /// Humans hand back their queued move (clearing the slot) or
    /// [`Decision::Pending`]. Bots always decide.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMove`] if a bot is asked to move on a
    /// full board.
    #[instrument(skip(self, board), fields(symbol = %self.symbol()))]
    pub fn decide_move(&mut self, board: &Board) -> Result<Decision, EngineError> {
        match self {
            Player::Human(human) => Ok(human.take().map_or(Decision::Pending, Decision::Move)),
            Player::Bot(bot) => bot.decide(board).map(Decision::Move),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.difficulty() {
            Some(difficulty) => write!(f, "{} bot ({})", difficulty.label(), self.symbol()),
            None => write!(f, "Human ({})", self.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_without_input_is_pending() {
        let mut player = Player::human(Symbol::X);
        assert_eq!(player.decide_move(&Board::new()), Ok(Decision::Pending));
    }

    #[test]
    fn test_human_queued_move_is_consumed_once() {
        let mut player = Player::human(Symbol::O);
        let mv = Move::new(0, 1, Symbol::O).unwrap();
        player.as_human_mut().unwrap().submit(mv).unwrap();

        assert_eq!(player.decide_move(&Board::new()), Ok(Decision::Move(mv)));
        assert_eq!(player.decide_move(&Board::new()), Ok(Decision::Pending));
    }

    #[test]
    fn test_bot_always_decides() {
        let mut player = Player::seeded_bot(Symbol::X, Difficulty::Easy, 17);
        assert!(player.as_human_mut().is_none());
        match player.decide_move(&Board::new()) {
            Ok(Decision::Move(mv)) => assert_eq!(mv.symbol(), Symbol::X),
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Player::human(Symbol::X).to_string(), "Human (X)");
        assert_eq!(
            Player::seeded_bot(Symbol::O, Difficulty::Extreme, 0).to_string(),
            "Extreme bot (O)"
        );
    }
}
