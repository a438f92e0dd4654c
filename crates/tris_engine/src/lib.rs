//! Tris engine - tic-tac-toe rules, bots and match orchestration
//!
//! This crate holds everything a front end needs to run a match of
//! tic-tac-toe between humans and bots of three strengths.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid state machine with win/draw detection
//! - **Rules**: pure line and fullness checks over a board
//! - **Strategy**: the three bot engines (easy, intermediate, extreme)
//! - **Players**: closed set of participants (human or bot)
//! - **Game**: round sequencing, scoring and starter selection
//!
//! # Example
//!
//! ```
//! use tris_engine::{Difficulty, Game, Mode, Move, Player, RoundStatus, Symbol};
//!
//! # fn example() -> Result<(), tris_engine::EngineError> {
//! let mut game = Game::new(
//!     Player::human(Symbol::X),
//!     Player::seeded_bot(Symbol::O, Difficulty::Extreme, 7),
//!     Mode::SinglePlayer,
//! )?;
//!
//! // Human move through the write channel, then the bot answers.
//! game.submit_move(Move::new(1, 1, Symbol::X)?)?;
//! assert_eq!(game.play_turn()?, RoundStatus::Ongoing);
//! assert_eq!(game.play_turn()?, RoundStatus::Ongoing);
//! assert_eq!(game.board().occupied_count(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod error;
mod game;
mod mode;
mod players;
mod score;
mod snapshot;
mod types;

pub mod rules;
pub mod strategy;

// Crate-level exports - Value types
pub use action::Move;
pub use types::{Cell, RoundStatus, Square, Symbol};

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Errors
pub use error::EngineError;

// Crate-level exports - Participants
pub use players::{BotPlayer, Decision, Difficulty, HumanInput, HumanPlayer, Player};

// Crate-level exports - Match orchestration
pub use game::Game;
pub use mode::Mode;
pub use score::ScoreKeeper;
pub use snapshot::MatchSnapshot;
