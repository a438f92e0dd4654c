//! Match mode selection.

use serde::{Deserialize, Serialize};

/// Match mode - who is across the board?
///
/// The mode never changes the rules; front ends use it to pace bot turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One human against one bot.
    #[default]
    SinglePlayer,
    /// Two humans sharing the board.
    Versus,
}

impl Mode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            Mode::SinglePlayer => "Single player",
            Mode::Versus => "Versus",
        }
    }
}
