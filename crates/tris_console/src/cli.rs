//! Command-line interface for tris.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tris_engine::{Difficulty, Symbol};

/// Tris - tic-tac-toe against humans or bots
#[derive(Parser, Debug)]
#[command(name = "tris")]
#[command(about = "Tic-tac-toe in the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against a bot
    Play {
        /// Bot strength (easy, intermediate, extreme)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Symbol you play; X opens the first round
        #[arg(short, long, default_value_t = Symbol::X)]
        symbol: Symbol,

        /// Stop after this many rounds
        #[arg(short, long)]
        rounds: Option<u32>,

        /// Seed for the bot's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Two humans sharing the console
    Versus {
        /// Stop after this many rounds
        #[arg(short, long)]
        rounds: Option<u32>,
    },

    /// Run a series between two bots
    Bots {
        /// Strength of the X bot
        #[arg(long, default_value_t = Difficulty::Extreme)]
        x: Difficulty,

        /// Strength of the O bot
        #[arg(long, default_value_t = Difficulty::Extreme)]
        o: Difficulty,

        /// Number of rounds in the series
        #[arg(short, long, default_value = "10")]
        rounds: u32,

        /// Seed for both bots' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
