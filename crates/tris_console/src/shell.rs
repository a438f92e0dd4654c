//! Interactive console loop driving a match.

use crate::input::{Input, parse_input};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};
use tris_engine::{Cell, EngineError, Game, Mode, Move, RoundStatus, ScoreKeeper, Symbol};

/// Reads moves from `input` and draws the match to `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    bot_delay: Duration,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell. `bot_delay` paces bot turns in single-player matches.
    pub fn new(input: R, output: W, bot_delay: Duration) -> Self {
        Self {
            input,
            output,
            bot_delay,
        }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until `rounds` have finished or the user quits.
    ///
    /// A limit of zero plays nothing.
    ///
    /// Returns the final score.
    #[instrument(skip(self, game), fields(mode = game.mode().name()))]
    pub fn run(&mut self, game: &mut Game, rounds: Option<u32>) -> Result<ScoreKeeper> {
        writeln!(
            self.output,
            "{}: {} vs {}",
            game.mode().name(),
            game.player(Symbol::X),
            game.player(Symbol::O)
        )?;

        let mut played = 0;
        while !rounds.is_some_and(|limit| played >= limit) {
            if played > 0 {
                let starter = game.start_next_round()?;
                writeln!(self.output, "\nRound {}: {} starts", played + 1, starter)?;
            }
            let Some(status) = self.play_round(game)? else {
                break;
            };
            played += 1;
            self.announce(game, status)?;
        }

        info!(played, "Match finished");
        writeln!(self.output, "Final score  {}", game.scores())?;
        Ok(*game.scores())
    }

    /// Plays the round on the board to its end.
    ///
    /// Returns `None` if the user quit.
    fn play_round(&mut self, game: &mut Game) -> Result<Option<RoundStatus>> {
        self.render(game)?;
        loop {
            let status = game.status();
            if status.is_terminal() {
                return Ok(Some(status));
            }

            if game.current_player().is_human() {
                let Some(cell) = self.prompt(game)? else {
                    return Ok(None);
                };
                match game.play_move(Move::at(cell, game.current_symbol())) {
                    Ok(_) => {}
                    Err(EngineError::CellOccupied { cell }) => {
                        writeln!(self.output, "Cell {cell} is taken")?;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }
            } else {
                if game.mode() == Mode::SinglePlayer && !self.bot_delay.is_zero() {
                    std::thread::sleep(self.bot_delay);
                }
                game.play_turn()?;
            }
            self.render(game)?;
        }
    }

    /// Asks for a cell until one is free, or returns `None` on quit or end of input.
    fn prompt(&mut self, game: &Game) -> Result<Option<Cell>> {
        let mut line = String::new();
        loop {
            write!(
                self.output,
                "{} to move (row col, 1-9, q to quit): ",
                game.current_symbol()
            )?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                debug!("Input closed");
                return Ok(None);
            }

            match parse_input(&line) {
                Ok(Input::Quit) => return Ok(None),
                Ok(Input::Cell(cell)) if !game.board().is_cell_empty(cell) => {
                    writeln!(self.output, "Cell {cell} is taken")?;
                }
                Ok(Input::Cell(cell)) => return Ok(Some(cell)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn render(&mut self, game: &Game) -> Result<()> {
        writeln!(self.output, "\n{}\n", game.board())?;
        let status = game.status();
        if status.is_terminal() {
            writeln!(self.output, "Round over: {status}")?;
        } else {
            writeln!(self.output, "{} to play", game.current_player())?;
        }
        writeln!(self.output, "Score  {}", game.scores())?;
        Ok(())
    }

    fn announce(&mut self, game: &Game, status: RoundStatus) -> Result<()> {
        if let Some(line) = game.board().winning_line() {
            let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
            writeln!(self.output, "Winning line: {}", cells.join(" "))?;
        }
        writeln!(self.output, "{status}!  Score  {}", game.scores())?;
        Ok(())
    }
}
