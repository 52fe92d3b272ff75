//! Win detection for a single board.

use crate::action::Placement;
use crate::position::Position;
use crate::types::{BoardId, Grid, Piece, Square};
use tracing::instrument;

/// Lines checked for three-in-a-row: rows, then columns, then diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the grid.
///
/// Returns `Some(piece)` for the first line holding three equal pieces,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(grid: &Grid) -> Option<Piece> {
    for [a, b, c] in LINES {
        let sq = grid.get(a);
        if sq != Square::Empty && sq == grid.get(b) && sq == grid.get(c) {
            return match sq {
                Square::Occupied(piece) => Some(piece),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Evaluates one board of a match from its recorded placements.
#[instrument(level = "trace", skip(moves))]
pub fn board_winner(moves: &[Placement], board: BoardId) -> Option<Piece> {
    check_winner(&Grid::from_placements(moves, board))
}
