//! Tests for move attempts: validation order, collisions and turn accounting.

mod common;

use common::{cell, play, started};
use quantum_tictactoe::{
    BoardId, MatchError, MoveOutcome, Piece, Placement, PlayerId, Position,
};

#[test]
fn test_placement_is_recorded_and_turn_passes() {
    let (mut game, x, _) = started();
    let outcome = play(&mut game, &x, BoardId::B, 1, 2);

    let expected = Placement::new(BoardId::B, Position::MiddleRight, Piece::X);
    assert_eq!(outcome, MoveOutcome::Placed(expected));
    assert_eq!(game.moves(), &[expected]);
    assert_eq!(game.attempt_count(), 1);
    assert_eq!(game.to_move(), Some(Piece::O));
}

#[test]
fn test_collision_reveals_and_spends_turn() {
    let (mut game, x, o) = started();
    play(&mut game, &x, BoardId::A, 0, 0);

    let outcome = play(&mut game, &o, BoardId::A, 0, 0);
    assert_eq!(
        outcome,
        MoveOutcome::Collided {
            board: BoardId::A,
            position: Position::TopLeft,
            piece: Piece::O,
        }
    );
    assert_eq!(game.moves().len(), 1);
    assert_eq!(game.moves()[0].piece, Piece::X);
    assert!(game.revealed().is_revealed(BoardId::A, Position::TopLeft));
    assert_eq!(game.revealed().count(), 1);
    assert_eq!(game.attempt_count(), 2);
    assert_eq!(game.to_move(), Some(Piece::X));
}

#[test]
fn test_turn_alternates_across_collision() {
    let (mut game, x, o) = started();
    play(&mut game, &x, BoardId::A, 0, 0);
    play(&mut game, &o, BoardId::A, 0, 0);

    // O lost its turn to the collision.
    assert_eq!(
        game.apply_move(&o, BoardId::C, cell(1, 1)),
        Err(MatchError::OutOfTurn { piece: Piece::O })
    );

    play(&mut game, &x, BoardId::B, 0, 0);
    play(&mut game, &o, BoardId::C, 1, 1);
    assert_eq!(
        game.apply_move(&o, BoardId::C, cell(2, 2)),
        Err(MatchError::OutOfTurn { piece: Piece::O })
    );
    assert_eq!(game.attempt_count(), 4);
}

#[test]
fn test_repeat_collision_spends_another_turn() {
    let (mut game, x, o) = started();
    play(&mut game, &x, BoardId::C, 2, 0);
    play(&mut game, &o, BoardId::C, 2, 0);
    play(&mut game, &x, BoardId::A, 1, 1);

    let outcome = play(&mut game, &o, BoardId::C, 2, 0);
    assert!(outcome.is_collision());
    assert_eq!(game.attempt_count(), 4);
    assert_eq!(game.moves().len(), 2);
    assert_eq!(game.revealed().count(), 1);
}

#[test]
fn test_x_can_collide_with_o() {
    let (mut game, x, o) = started();
    play(&mut game, &x, BoardId::A, 0, 0);
    play(&mut game, &o, BoardId::B, 2, 2);

    assert!(play(&mut game, &x, BoardId::B, 2, 2).is_collision());
    assert!(game.revealed().is_revealed(BoardId::B, Position::BottomRight));
    assert_eq!(
        game.placement_at(BoardId::B, Position::BottomRight)
            .map(|p| p.piece),
        Some(Piece::O)
    );
}

#[test]
fn test_reclaiming_own_cell_is_rejected() {
    let (mut game, x, o) = started();
    play(&mut game, &x, BoardId::A, 1, 1);
    play(&mut game, &o, BoardId::B, 1, 1);
    let before = game.clone();

    assert_eq!(
        game.apply_move(&x, BoardId::A, Position::Center),
        Err(MatchError::CellAlreadyOwnedBySelf {
            board: BoardId::A,
            position: Position::Center,
            piece: Piece::X,
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_stranger_is_not_in_game() {
    let (mut game, _, _) = started();
    assert_eq!(
        game.apply_move(&PlayerId::from("mallory"), BoardId::A, Position::Center),
        Err(MatchError::NotInGame {
            player: "mallory".into()
        })
    );
    assert_eq!(game.attempt_count(), 0);
}

/// X completes the top row of board A while O plays on B.
fn x_wins_a() -> (quantum_tictactoe::QuantumMatch, PlayerId, PlayerId) {
    let (mut game, x, o) = started();
    play(&mut game, &x, BoardId::A, 0, 0);
    play(&mut game, &o, BoardId::B, 0, 0);
    play(&mut game, &x, BoardId::A, 0, 1);
    play(&mut game, &o, BoardId::B, 0, 1);
    play(&mut game, &x, BoardId::A, 0, 2);
    (game, x, o)
}

#[test]
fn test_won_board_is_closed() {
    let (mut game, _, o) = x_wins_a();
    let before = game.clone();
    assert_eq!(
        game.apply_move(&o, BoardId::A, Position::Center),
        Err(MatchError::BoardAlreadyWon { board: BoardId::A })
    );
    assert_eq!(game, before);
}

#[test]
fn test_collision_on_won_board_is_not_absorbed() {
    let (mut game, _, o) = x_wins_a();
    assert_eq!(
        game.apply_move(&o, BoardId::A, Position::TopLeft),
        Err(MatchError::BoardAlreadyWon { board: BoardId::A })
    );
    assert!(!game.revealed().is_revealed(BoardId::A, Position::TopLeft));
    assert_eq!(game.attempt_count(), 5);
}

#[test]
fn test_board_state_checked_before_turn() {
    let (mut game, x, _) = x_wins_a();
    // It is O's turn; X is both out of turn and on a closed board.
    assert_eq!(
        game.apply_move(&x, BoardId::A, Position::Center),
        Err(MatchError::BoardAlreadyWon { board: BoardId::A })
    );
    // On an open board the same X attempt is out of turn.
    assert_eq!(
        game.apply_move(&x, BoardId::C, Position::Center),
        Err(MatchError::OutOfTurn { piece: Piece::X })
    );
}

#[test]
fn test_recorded_moves_survive_board_win() {
    let (game, _, _) = x_wins_a();
    let on_a: Vec<_> = game.moves().iter().filter(|m| m.board == BoardId::A).collect();
    assert_eq!(on_a.len(), 3);
    assert_eq!(game.board_winner(BoardId::A), Some(Piece::X));
}
