//! Bot-versus-bot series.

use anyhow::{Result, bail};
use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument};
use tris_engine::{Difficulty, Game, Mode, Player, RoundStatus, Symbol};

/// One finished round of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct RoundRecord {
    /// One-based round number.
    round: u32,
    /// Symbol that opened the round.
    starter: Symbol,
    /// How the round ended.
    status: RoundStatus,
    /// Marks on the board at the end.
    moves: usize,
}

/// Result of a whole series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SeriesSummary {
    /// Strength of the X bot.
    x: Difficulty,
    /// Strength of the O bot.
    o: Difficulty,
    /// Seed the bots were built from.
    seed: u64,
    /// Rounds won by X.
    wins_x: u32,
    /// Rounds won by O.
    wins_o: u32,
    /// Drawn rounds.
    draws: u32,
    /// Every round in order.
    rounds: Vec<RoundRecord>,
}

/// Plays `rounds` rounds between two bots.
///
/// X is seeded with `seed` and O with `seed + 1`; without a seed one is drawn
/// and reported in the summary so the series can be replayed. Starters follow
/// the usual rule: the loser opens, and after a draw the other side does.
#[instrument]
pub fn run_series(
    x: Difficulty,
    o: Difficulty,
    rounds: u32,
    seed: Option<u64>,
) -> Result<SeriesSummary> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut game = Game::new(
        Player::seeded_bot(Symbol::X, x, seed),
        Player::seeded_bot(Symbol::O, o, seed.wrapping_add(1)),
        Mode::Versus,
    )?;

    let mut records = Vec::new();
    let mut draws = 0;
    for round in 1..=rounds {
        if round > 1 {
            game.start_next_round()?;
        }
        let starter = game.round_starter();
        let status = play_out(&mut game)?;
        if status == RoundStatus::Draw {
            draws += 1;
        }
        info!(round, %starter, %status, "Series round finished");
        records.push(RoundRecord {
            round,
            starter,
            status,
            moves: game.board().occupied_count(),
        });
    }

    Ok(SeriesSummary {
        x,
        o,
        seed,
        wins_x: game.scores().score(Symbol::X),
        wins_o: game.scores().score(Symbol::O),
        draws,
        rounds: records,
    })
}

fn play_out(game: &mut Game) -> Result<RoundStatus> {
    // A bot round never takes more turns than there are cells.
    for _ in 0..9 {
        let status = game.play_turn()?;
        if status.is_terminal() {
            return Ok(status);
        }
    }
    bail!("Round did not finish within nine turns")
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {:>3}  {} starts  {} in {} moves",
            self.round, self.starter, self.status, self.moves
        )
    }
}

impl std::fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (X) vs {} (O), seed {}: X {}  O {}  draws {}",
            self.x.label(),
            self.o.label(),
            self.seed,
            self.wins_x,
            self.wins_o,
            self.draws
        )
    }
}
