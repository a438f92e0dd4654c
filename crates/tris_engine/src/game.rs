//! Match orchestration: turns, rounds and scoring.

use crate::{
    Board, Decision, EngineError, MatchSnapshot, Mode, Move, Player, RoundStatus, ScoreKeeper,
    Symbol,
};
use tracing::{debug, info, instrument, warn};

/// A match between two seated participants.
///
/// The match owns the board and the running score. Rounds are played on the
/// same board, cleared between rounds; the score lives as long as the match
/// and can be handed on to the next one with [`Game::with_scores`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    player_x: Player,
    player_o: Player,
    scores: ScoreKeeper,
    current: Symbol,
    round_starter: Symbol,
    mode: Mode,
}

impl Game {
    /// Creates a match. X opens the first round.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SeatMismatch`] if `player_x` does not play X or
    /// `player_o` does not play O.
    pub fn new(player_x: Player, player_o: Player, mode: Mode) -> Result<Self, EngineError> {
        Self::with_scores(player_x, player_o, ScoreKeeper::new(), mode)
    }

    /// Creates a match that continues the tally in `scores`.
    ///
    /// Hand [`Game::scores`] from a finished match to carry the score over to
    /// a new pair of players.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    #[instrument(skip(player_x, player_o), fields(x = %player_x, o = %player_o))]
    pub fn with_scores(
        player_x: Player,
        player_o: Player,
        scores: ScoreKeeper,
        mode: Mode,
    ) -> Result<Self, EngineError> {
        for (seat, player) in [(Symbol::X, &player_x), (Symbol::O, &player_o)] {
            if player.symbol() != seat {
                return Err(EngineError::SeatMismatch {
                    seat,
                    found: player.symbol(),
                });
            }
        }
        info!(mode = mode.name(), %scores, "Starting match");
        Ok(Self {
            board: Board::new(),
            player_x,
            player_o,
            scores,
            current: Symbol::X,
            round_starter: Symbol::X,
            mode,
        })
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Status of the current round.
    pub fn status(&self) -> RoundStatus {
        self.board.status()
    }

    /// Symbol whose turn it is.
    pub fn current_symbol(&self) -> Symbol {
        self.current
    }

    /// The participant whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// The participant seated at `symbol`.
    pub fn player(&self, symbol: Symbol) -> &Player {
        match symbol {
            Symbol::X => &self.player_x,
            Symbol::O => &self.player_o,
        }
    }

    /// Symbol that opened the current round.
    pub fn round_starter(&self) -> Symbol {
        self.round_starter
    }

    /// Running score of the match.
    pub fn scores(&self) -> &ScoreKeeper {
        &self.scores
    }

    /// Match mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Captures a detached view of the match.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(self)
    }

    /// Queues a move for the human participant whose turn it is.
    ///
    /// The move is played on the next [`Game::play_turn`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::RoundOver`] if the round has ended
    /// - [`EngineError::NotHumanTurn`] if a bot holds the turn
    /// - [`EngineError::WrongSymbol`] if the move is for the other symbol
    /// - [`EngineError::CellOccupied`] if the target cell is taken
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn submit_move(&mut self, mv: Move) -> Result<(), EngineError> {
        let status = self.board.status();
        if status.is_terminal() {
            warn!(%status, "Move submitted after round ended");
            return Err(EngineError::RoundOver { status });
        }
        let symbol = self.current;
        let occupied = !self.board.is_cell_empty(mv.cell());
        let human = self
            .seat_mut(symbol)
            .as_human_mut()
            .ok_or(EngineError::NotHumanTurn { symbol })?;
        if occupied {
            warn!(cell = %mv.cell(), "Move submitted on occupied cell");
            return Err(EngineError::CellOccupied { cell: mv.cell() });
        }
        human.submit(mv)
    }

    /// Queues a human move and plays it right away.
    ///
    /// # Errors
    ///
    /// Same as [`Game::submit_move`] and [`Game::play_turn`].
    pub fn play_move(&mut self, mv: Move) -> Result<RoundStatus, EngineError> {
        self.submit_move(mv)?;
        self.play_turn()
    }

    /// Plays one turn for the participant whose turn it is.
    ///
    /// A human with nothing queued leaves the match untouched and the current
    /// status is returned; the caller supplies a move and calls again. After a
    /// move the turn passes to the other side, or the winner's score goes up if
    /// the move ended the round.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RoundOver`] if the round has already ended
    /// - [`EngineError::NoLegalMove`] if a bot cannot move
    /// - [`EngineError::CellOccupied`] or [`EngineError::WrongSymbol`] if the
    ///   decided move is not playable; the board is left untouched
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn play_turn(&mut self) -> Result<RoundStatus, EngineError> {
        let status = self.board.status();
        if status.is_terminal() {
            warn!(%status, "Turn requested after round ended");
            return Err(EngineError::RoundOver { status });
        }

        let symbol = self.current;
        let player = match symbol {
            Symbol::X => &mut self.player_x,
            Symbol::O => &mut self.player_o,
        };
        let mv = match player.decide_move(&self.board)? {
            Decision::Move(mv) => mv,
            Decision::Pending => {
                debug!("Waiting for human input");
                return Ok(status);
            }
        };
        if mv.symbol() != symbol {
            return Err(EngineError::WrongSymbol {
                expected: symbol,
                found: mv.symbol(),
            });
        }

        self.board.apply_move(mv)?;
        let status = self.board.status();
        debug!(%mv, %status, "Move applied");

        match status.winner() {
            None if !status.is_terminal() => self.current = symbol.opponent(),
            Some(winner) => {
                info!(%winner, "Round won");
                self.scores.increment(winner);
            }
            None => info!("Round drawn"),
        }
        Ok(status)
    }

    /// Clears the board and hands the first move to `starter`.
    ///
    /// Scores are kept.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self, starter: Symbol) {
        self.board.reset();
        for player in [&mut self.player_x, &mut self.player_o] {
            if let Some(human) = player.as_human_mut() {
                human.take();
            }
        }
        self.current = starter;
        self.round_starter = starter;
        info!("New round");
    }

    /// Who opens the round after one that ended with `last_status`.
    ///
    /// The loser of a won round starts the next one. After a draw the side that
    /// did not open the finished round starts.
    pub fn next_starter(&self, last_status: RoundStatus) -> Symbol {
        match last_status {
            RoundStatus::WinX => Symbol::O,
            RoundStatus::WinO => Symbol::X,
            RoundStatus::Draw | RoundStatus::Ongoing => self.round_starter.opponent(),
        }
    }

    /// Starts the round that follows the finished one on the board.
    ///
    /// Returns the symbol that opens the new round.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoundInProgress`] if the current round is not over.
    pub fn start_next_round(&mut self) -> Result<Symbol, EngineError> {
        let status = self.board.status();
        if !status.is_terminal() {
            return Err(EngineError::RoundInProgress);
        }
        let starter = self.next_starter(status);
        self.start_new_round(starter);
        Ok(starter)
    }

    /// Zeroes the running score, keeping players and board.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    fn seat_mut(&mut self, symbol: Symbol) -> &mut Player {
        match symbol {
            Symbol::X => &mut self.player_x,
            Symbol::O => &mut self.player_o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Difficulty};

    fn humans() -> Game {
        Game::new(
            Player::human(Symbol::X),
            Player::human(Symbol::O),
            Mode::Versus,
        )
        .unwrap()
    }

    fn mv(row: usize, col: usize, symbol: Symbol) -> Move {
        Move::new(row, col, symbol).unwrap()
    }

    #[test]
    fn test_seats_are_checked() {
        let result = Game::new(
            Player::human(Symbol::O),
            Player::human(Symbol::O),
            Mode::Versus,
        );
        assert!(matches!(
            result,
            Err(EngineError::SeatMismatch {
                seat: Symbol::X,
                found: Symbol::O
            })
        ));
    }

    #[test]
    fn test_pending_human_turn_changes_nothing() {
        let mut game = humans();
        let before = game.board().clone();
        assert_eq!(game.play_turn(), Ok(RoundStatus::Ongoing));
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_symbol(), Symbol::X);
    }

    #[test]
    fn test_turn_passes_after_a_move() {
        let mut game = humans();
        assert_eq!(game.play_move(mv(1, 1, Symbol::X)), Ok(RoundStatus::Ongoing));
        assert_eq!(game.current_symbol(), Symbol::O);
        assert_eq!(game.board().get(Cell::CENTER).symbol(), Some(Symbol::X));
    }

    #[test]
    fn test_submit_rejects_occupied_cell_and_wrong_symbol() {
        let mut game = humans();
        game.play_move(mv(0, 0, Symbol::X)).unwrap();

        assert_eq!(
            game.submit_move(mv(0, 0, Symbol::O)),
            Err(EngineError::CellOccupied {
                cell: Cell::new(0, 0).unwrap()
            })
        );
        assert_eq!(
            game.submit_move(mv(2, 2, Symbol::X)),
            Err(EngineError::WrongSymbol {
                expected: Symbol::O,
                found: Symbol::X
            })
        );
        assert_eq!(game.current_symbol(), Symbol::O);
    }

    #[test]
    fn test_submit_rejected_on_bot_turn() {
        let mut game = Game::new(
            Player::seeded_bot(Symbol::X, Difficulty::Easy, 1),
            Player::human(Symbol::O),
            Mode::SinglePlayer,
        )
        .unwrap();
        assert_eq!(
            game.submit_move(mv(0, 0, Symbol::X)),
            Err(EngineError::NotHumanTurn { symbol: Symbol::X })
        );
    }

    #[test]
    fn test_win_scores_once_and_keeps_last_mover() {
        let mut game = humans();
        for m in [
            mv(0, 0, Symbol::X),
            mv(1, 0, Symbol::O),
            mv(0, 1, Symbol::X),
            mv(1, 1, Symbol::O),
        ] {
            assert_eq!(game.play_move(m), Ok(RoundStatus::Ongoing));
        }
        assert_eq!(game.play_move(mv(0, 2, Symbol::X)), Ok(RoundStatus::WinX));
        assert_eq!(game.scores().score(Symbol::X), 1);
        assert_eq!(game.scores().score(Symbol::O), 0);
        assert_eq!(game.current_symbol(), Symbol::X);

        assert_eq!(
            game.play_turn(),
            Err(EngineError::RoundOver {
                status: RoundStatus::WinX
            })
        );
        assert_eq!(game.scores().score(Symbol::X), 1);
    }

    #[test]
    fn test_next_starter_rules() {
        let mut game = humans();
        assert_eq!(game.next_starter(RoundStatus::WinO), Symbol::X);
        assert_eq!(game.next_starter(RoundStatus::WinX), Symbol::O);
        assert_eq!(game.next_starter(RoundStatus::Draw), Symbol::O);

        game.start_new_round(Symbol::O);
        assert_eq!(game.next_starter(RoundStatus::Draw), Symbol::X);
        assert_eq!(game.next_starter(RoundStatus::WinO), Symbol::X);
    }

    #[test]
    fn test_start_new_round_clears_board_and_pending_input() {
        let mut game = humans();
        game.play_move(mv(0, 0, Symbol::X)).unwrap();
        game.submit_move(mv(2, 2, Symbol::O)).unwrap();

        game.start_new_round(Symbol::O);

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_symbol(), Symbol::O);
        assert_eq!(game.round_starter(), Symbol::O);
        // Queued move from the old round is gone.
        assert_eq!(game.play_turn(), Ok(RoundStatus::Ongoing));
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn test_start_next_round_requires_finished_round() {
        let mut game = humans();
        assert_eq!(game.start_next_round(), Err(EngineError::RoundInProgress));
    }

    #[test]
    fn test_with_scores_continues_tally() {
        let mut carried = ScoreKeeper::new();
        carried.increment(Symbol::O);

        let mut game = Game::with_scores(
            Player::human(Symbol::X),
            Player::human(Symbol::O),
            carried,
            Mode::Versus,
        )
        .unwrap();
        for m in [
            mv(0, 0, Symbol::X),
            mv(1, 0, Symbol::O),
            mv(0, 1, Symbol::X),
            mv(1, 1, Symbol::O),
            mv(0, 2, Symbol::X),
        ] {
            game.play_move(m).unwrap();
        }
        assert_eq!(game.scores().score(Symbol::X), 1);
        assert_eq!(game.scores().score(Symbol::O), 1);

        // A rematch with a bot keeps the running total.
        let rematch = Game::with_scores(
            Player::human(Symbol::X),
            Player::seeded_bot(Symbol::O, Difficulty::Easy, 2),
            *game.scores(),
            Mode::SinglePlayer,
        )
        .unwrap();
        assert_eq!(rematch.scores(), game.scores());
        assert_eq!(rematch.board(), &Board::new());
    }

    #[test]
    fn test_with_scores_checks_seats() {
        let result = Game::with_scores(
            Player::human(Symbol::X),
            Player::human(Symbol::X),
            ScoreKeeper::new(),
            Mode::Versus,
        );
        assert!(matches!(
            result,
            Err(EngineError::SeatMismatch {
                seat: Symbol::O,
                found: Symbol::X
            })
        ));
    }

    #[test]
    fn test_reset_scores() {
        let mut game = humans();
        for m in [
            mv(0, 0, Symbol::X),
            mv(1, 0, Symbol::O),
            mv(0, 1, Symbol::X),
            mv(1, 1, Symbol::O),
            mv(0, 2, Symbol::X),
        ] {
            game.play_move(m).unwrap();
        }
        game.reset_scores();
        assert_eq!(game.scores(), &ScoreKeeper::new());
        assert_eq!(game.status(), RoundStatus::WinX);
    }
}
