//! Exhaustion detection for a single board.

use super::win::board_winner;
use crate::action::Placement;
use crate::types::{BoardId, Grid};
use tracing::instrument;

/// Checks if the grid is full (all squares occupied).
pub fn is_full(grid: &Grid) -> bool {
    grid.occupied() == grid.squares().len()
}

/// Checks if every cell of `board` holds a recorded placement.
#[instrument(level = "trace", skip(moves))]
pub fn is_exhausted(moves: &[Placement], board: BoardId) -> bool {
    is_full(&Grid::from_placements(moves, board))
}

/// A board is settled once it is won or exhausted. No further points can
/// come from it.
#[instrument(level = "trace", skip(moves))]
pub fn is_settled(moves: &[Placement], board: BoardId) -> bool {
    board_winner(moves, board).is_some() || is_exhausted(moves, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Piece;

    /// X O X / X O O / O X X: full, no line.
    fn drawn_board(board: BoardId) -> Vec<Placement> {
        let pieces = [
            Piece::X,
            Piece::O,
            Piece::X,
            Piece::X,
            Piece::O,
            Piece::O,
            Piece::O,
            Piece::X,
            Piece::X,
        ];
        Position::ALL
            .into_iter()
            .zip(pieces)
            .map(|(pos, piece)| Placement::new(board, pos, piece))
            .collect()
    }

    #[test]
    fn test_empty_board_not_exhausted() {
        assert!(!is_exhausted(&[], BoardId::A));
        assert!(!is_settled(&[], BoardId::A));
    }

    #[test]
    fn test_drawn_board_is_exhausted_and_settled() {
        let moves = drawn_board(BoardId::B);
        assert!(is_exhausted(&moves, BoardId::B));
        assert_eq!(board_winner(&moves, BoardId::B), None);
        assert!(is_settled(&moves, BoardId::B));
        assert!(!is_settled(&moves, BoardId::A));
    }

    #[test]
    fn test_won_board_is_settled_before_full() {
        let moves = vec![
            Placement::new(BoardId::C, Position::TopLeft, Piece::X),
            Placement::new(BoardId::C, Position::Center, Piece::X),
            Placement::new(BoardId::C, Position::BottomRight, Piece::X),
        ];
        assert!(!is_exhausted(&moves, BoardId::C));
        assert!(is_settled(&moves, BoardId::C));
    }
}
