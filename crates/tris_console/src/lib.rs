//! Tris console - play tic-tac-toe in a terminal
//!
//! Line-oriented front end over `tris_engine`: a human-vs-bot mode, a
//! two-human mode and unattended bot series.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod series;
mod shell;

// Crate-level exports - Command line
pub use cli::{Cli, Command};
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Interactive play
pub use input::{Input, InputError, parse_input};
pub use shell::Shell;

// Crate-level exports - Bot series
pub use series::{RoundRecord, SeriesSummary, run_series};
