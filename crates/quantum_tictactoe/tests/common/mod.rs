//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use quantum_tictactoe::{BoardId, MoveOutcome, PlayerId, Position, QuantumMatch};

/// A match with "xavier" in seat X and "olivia" in seat O.
pub fn started() -> (QuantumMatch, PlayerId, PlayerId) {
    let mut game = QuantumMatch::new();
    let x = PlayerId::from("xavier");
    let o = PlayerId::from("olivia");
    game.join(x.clone()).expect("first seat");
    game.join(o.clone()).expect("second seat");
    (game, x, o)
}

/// Shorthand for a cell by row and column.
pub fn cell(row: u8, col: u8) -> Position {
    Position::from_row_col(row, col).expect("cell on board")
}

/// Applies an attempt that must be accepted.
pub fn play(
    game: &mut QuantumMatch,
    player: &PlayerId,
    board: BoardId,
    row: u8,
    col: u8,
) -> MoveOutcome {
    game.apply_move(player, board, cell(row, col))
        .unwrap_or_else(|e| panic!("{player} at {board}({row}, {col}) rejected: {e}"))
}
