//! Tris - console tic-tac-toe
//!
//! Play against a bot, against a friend, or watch bots play each other.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tris_console::{Cli, Command, MatchConfig, Shell, run_series};
use tris_engine::{Difficulty, Game, Mode, Player, Symbol};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MatchConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            difficulty,
            symbol,
            rounds,
            seed,
        } => run_play(
            &config,
            difficulty.unwrap_or(*config.difficulty()),
            symbol,
            rounds.or(*config.rounds()),
            seed.or(*config.seed()),
        ),
        Command::Versus { rounds } => run_versus(rounds.or(*config.rounds())),
        Command::Bots {
            x,
            o,
            rounds,
            seed,
            json,
        } => run_bots(x, o, rounds, seed.or(*config.seed()), json),
    }
}

/// Human against a bot
#[instrument(skip(config))]
fn run_play(
    config: &MatchConfig,
    difficulty: Difficulty,
    symbol: Symbol,
    rounds: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let bot_symbol = symbol.opponent();
    let bot = match seed {
        Some(seed) => Player::seeded_bot(bot_symbol, difficulty, seed),
        None => Player::bot(bot_symbol, difficulty),
    };
    let (player_x, player_o) = match symbol {
        Symbol::X => (Player::human(Symbol::X), bot),
        Symbol::O => (bot, Player::human(Symbol::O)),
    };
    let mut game = Game::new(player_x, player_o, Mode::SinglePlayer)?;

    info!(%difficulty, %symbol, "Starting single player match");
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config.bot_delay());
    shell.run(&mut game, rounds)?;
    Ok(())
}

/// Two humans at one console
#[instrument]
fn run_versus(rounds: Option<u32>) -> Result<()> {
    let mut game = Game::new(
        Player::human(Symbol::X),
        Player::human(Symbol::O),
        Mode::Versus,
    )?;

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), Duration::ZERO);
    shell.run(&mut game, rounds)?;
    Ok(())
}

/// Bot series with a per-round log and a summary
#[instrument]
fn run_bots(
    x: Difficulty,
    o: Difficulty,
    rounds: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let summary = run_series(x, o, rounds, seed)?;
    let mut out = io::stdout().lock();

    if json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        writeln!(out, "{text}")?;
    } else {
        for record in summary.rounds() {
            writeln!(out, "{record}")?;
        }
        writeln!(out, "{summary}")?;
    }
    Ok(())
}
