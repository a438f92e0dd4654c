//! Tests for round sequencing, scoring and the human write channel.

use tris_engine::{
    Difficulty, EngineError, Game, Mode, Move, Player, RoundStatus, ScoreKeeper, Symbol,
};

fn versus() -> Game {
    Game::new(
        Player::human(Symbol::X),
        Player::human(Symbol::O),
        Mode::Versus,
    )
    .unwrap()
}

fn play_all(game: &mut Game, moves: &[(usize, usize, Symbol)]) -> RoundStatus {
    let mut status = game.status();
    for &(row, col, symbol) in moves {
        status = game.play_move(Move::new(row, col, symbol).unwrap()).unwrap();
    }
    status
}

#[test]
fn test_o_wins_on_left_column() {
    let mut game = versus();
    let status = play_all(
        &mut game,
        &[
            (1, 1, Symbol::X),
            (0, 0, Symbol::O),
            (0, 2, Symbol::X),
            (2, 0, Symbol::O),
            (2, 2, Symbol::X),
            (1, 0, Symbol::O),
        ],
    );
    assert_eq!(status, RoundStatus::WinO);
    assert_eq!(game.scores().score(Symbol::O), 1);
    assert_eq!(game.scores().score(Symbol::X), 0);
    assert_eq!(game.next_starter(status), Symbol::X);
}

#[test]
fn test_draw_round() {
    let mut game = versus();
    // X O X / X O O / O X X
    let status = play_all(
        &mut game,
        &[
            (0, 0, Symbol::X),
            (0, 1, Symbol::O),
            (0, 2, Symbol::X),
            (1, 1, Symbol::O),
            (1, 0, Symbol::X),
            (1, 2, Symbol::O),
            (2, 1, Symbol::X),
            (2, 0, Symbol::O),
            (2, 2, Symbol::X),
        ],
    );
    assert_eq!(status, RoundStatus::Draw);
    assert_eq!(game.scores(), &ScoreKeeper::new());
    // X opened this round, so O opens the next.
    assert_eq!(game.start_next_round(), Ok(Symbol::O));
    assert_eq!(game.current_symbol(), Symbol::O);
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_scores_survive_rounds() {
    let mut game = versus();
    let x_top_row = [
        (0, 0, Symbol::X),
        (1, 0, Symbol::O),
        (0, 1, Symbol::X),
        (1, 1, Symbol::O),
        (0, 2, Symbol::X),
    ];
    assert_eq!(play_all(&mut game, &x_top_row), RoundStatus::WinX);

    // Loser opens the next round.
    assert_eq!(game.start_next_round(), Ok(Symbol::O));
    let o_diagonal = [
        (0, 0, Symbol::O),
        (0, 1, Symbol::X),
        (1, 1, Symbol::O),
        (0, 2, Symbol::X),
        (2, 2, Symbol::O),
    ];
    assert_eq!(play_all(&mut game, &o_diagonal), RoundStatus::WinO);

    assert_eq!(game.scores().score(Symbol::X), 1);
    assert_eq!(game.scores().score(Symbol::O), 1);
    assert_eq!(game.start_next_round(), Ok(Symbol::X));
}

#[test]
fn test_moves_after_round_end_are_rejected() {
    let mut game = versus();
    play_all(
        &mut game,
        &[
            (0, 0, Symbol::X),
            (1, 0, Symbol::O),
            (0, 1, Symbol::X),
            (1, 1, Symbol::O),
            (0, 2, Symbol::X),
        ],
    );
    let late = Move::new(2, 2, Symbol::X).unwrap();
    assert_eq!(
        game.submit_move(late),
        Err(EngineError::RoundOver {
            status: RoundStatus::WinX
        })
    );
}

#[test]
fn test_human_against_bot_waits_for_input() {
    let mut game = Game::new(
        Player::seeded_bot(Symbol::X, Difficulty::Intermediate, 3),
        Player::human(Symbol::O),
        Mode::SinglePlayer,
    )
    .unwrap();

    // Bot opens in the center.
    assert_eq!(game.play_turn(), Ok(RoundStatus::Ongoing));
    assert_eq!(game.board().occupied_count(), 1);
    assert_eq!(game.current_symbol(), Symbol::O);
    assert!(game.snapshot().awaiting_human());

    // No input yet: nothing happens.
    assert_eq!(game.play_turn(), Ok(RoundStatus::Ongoing));
    assert_eq!(game.board().occupied_count(), 1);

    game.submit_move(Move::new(0, 0, Symbol::O).unwrap())
        .unwrap();
    assert_eq!(game.play_turn(), Ok(RoundStatus::Ongoing));
    assert_eq!(game.board().occupied_count(), 2);
    assert_eq!(game.current_symbol(), Symbol::X);
    assert!(!game.snapshot().awaiting_human());
}

#[test]
fn test_later_submission_replaces_earlier_one() {
    let mut game = versus();
    game.submit_move(Move::new(0, 0, Symbol::X).unwrap())
        .unwrap();
    game.submit_move(Move::new(2, 2, Symbol::X).unwrap())
        .unwrap();
    game.play_turn().unwrap();

    assert!(game.board().get(tris_engine::Cell::new(0, 0).unwrap()).is_empty());
    assert_eq!(
        game.board()
            .get(tris_engine::Cell::new(2, 2).unwrap())
            .symbol(),
        Some(Symbol::X)
    );
}

#[test]
fn test_available_moves_complement_occupied_cells() {
    let mut game = versus();
    play_all(
        &mut game,
        &[(1, 1, Symbol::X), (0, 0, Symbol::O), (2, 1, Symbol::X)],
    );
    let board = game.board();
    let moves = board.available_moves(Symbol::O);
    assert_eq!(moves.len() + board.occupied_count(), 9);
    assert!(moves.iter().all(|mv| board.is_cell_empty(mv.cell())));
    assert!(moves.iter().all(|mv| mv.symbol() == Symbol::O));
}

#[test]
fn test_snapshot_serializes() {
    let mut game = versus();
    play_all(&mut game, &[(1, 1, Symbol::X)]);
    let json = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(json["board"][1][1], "X");
    assert!(json["board"][0][0].is_null());
    assert_eq!(json["status"], "Ongoing");
    assert_eq!(json["current"], "O");
    assert_eq!(json["mode"], "versus");
    assert_eq!(json["scores"]["wins_x"], 0);
}
