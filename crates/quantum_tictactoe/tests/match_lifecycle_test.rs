//! Tests for seating, leaving and match lifecycle.

mod common;

use common::{play, started};
use quantum_tictactoe::{
    BoardId, LeaveOutcome, MatchError, MatchStatus, Piece, PlayerId, Position, QuantumMatch,
};

#[test]
fn test_new_match_is_waiting() {
    let game = QuantumMatch::new();
    assert_eq!(game.status(), MatchStatus::WaitingToStart);
    assert_eq!(game.seat_x(), None);
    assert_eq!(game.seat_o(), None);
    assert!(game.moves().is_empty());
    assert_eq!(game.attempt_count(), 0);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_join_fills_x_then_o() {
    let mut game = QuantumMatch::new();
    assert_eq!(game.join("xavier"), Ok(Piece::X));
    assert_eq!(game.status(), MatchStatus::WaitingToStart);
    assert_eq!(game.join("olivia"), Ok(Piece::O));
    assert_eq!(game.status(), MatchStatus::InProgress);
    assert_eq!(game.seat_x(), Some(&PlayerId::from("xavier")));
    assert_eq!(game.seat_o(), Some(&PlayerId::from("olivia")));
}

#[test]
fn test_join_twice_is_already_seated() {
    let mut game = QuantumMatch::new();
    game.join("xavier").unwrap();
    assert_eq!(
        game.join("xavier"),
        Err(MatchError::AlreadySeated {
            player: "xavier".into()
        })
    );
    assert_eq!(game.seat_o(), None);
}

#[test]
fn test_already_seated_takes_precedence_over_full() {
    let (mut game, x, _) = started();
    assert_eq!(
        game.join(x.clone()),
        Err(MatchError::AlreadySeated { player: x })
    );
}

#[test]
fn test_third_player_is_rejected() {
    let (mut game, _, _) = started();
    let before = game.clone();
    assert_eq!(game.join("mallory"), Err(MatchError::Full));
    assert_eq!(game, before);
}

#[test]
fn test_leave_unknown_player_is_not_seated() {
    let (mut game, _, _) = started();
    assert_eq!(
        game.leave(&"mallory".into()),
        Err(MatchError::NotSeated {
            player: "mallory".into()
        })
    );
    assert_eq!(game.status(), MatchStatus::InProgress);
}

#[test]
fn test_leave_alone_resets_and_allows_rejoin() {
    let mut game = QuantumMatch::new();
    game.join("xavier").unwrap();

    assert_eq!(game.leave(&"xavier".into()), Ok(LeaveOutcome::Reset));
    assert_eq!(game, QuantumMatch::new());

    assert_eq!(game.join("olivia"), Ok(Piece::X));
    assert_eq!(game.join("xavier"), Ok(Piece::O));
    assert_eq!(game.status(), MatchStatus::InProgress);
}

#[test]
fn test_leave_with_opponent_forfeits() {
    let (mut game, x, o) = started();
    play(&mut game, &x, BoardId::A, 0, 0);

    assert_eq!(
        game.leave(&o),
        Ok(LeaveOutcome::Forfeited { winner: x.clone() })
    );
    assert_eq!(game.status(), MatchStatus::Over);
    assert_eq!(game.winner(), Some(&x));
    assert_eq!(game.to_move(), None);
}

#[test]
fn test_no_moves_after_forfeit() {
    let (mut game, x, o) = started();
    game.leave(&o).unwrap();
    let before = game.clone();

    assert_eq!(
        game.apply_move(&x, BoardId::B, Position::Center),
        Err(MatchError::NotInProgress {
            status: MatchStatus::Over
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_over_match_is_retired() {
    let (mut game, x, o) = started();
    game.leave(&x).unwrap();

    assert_eq!(game.join("mallory"), Err(MatchError::Full));
    assert_eq!(game.leave(&o), Ok(LeaveOutcome::Retired));
    assert_eq!(game.winner(), Some(&o));
}

#[test]
fn test_moves_rejected_before_start() {
    let mut game = QuantumMatch::new();
    game.join("xavier").unwrap();
    assert_eq!(
        game.apply_move(&"xavier".into(), BoardId::A, Position::Center),
        Err(MatchError::NotInProgress {
            status: MatchStatus::WaitingToStart
        })
    );
    assert_eq!(game.attempt_count(), 0);
}
