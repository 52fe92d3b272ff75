//! Cell positions within one 3x3 board.

use super::action::MatchError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on a board, in row-major order (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to grid index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> u8 {
        (self.to_index() / 3) as u8
    }

    /// Column of this position (0-2).
    pub fn col(self) -> u8 {
        (self.to_index() % 3) as u8
    }

    /// Converts raw `(row, col)` coordinates into a position.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::OffBoard`] when either coordinate is outside 0-2.
    #[instrument]
    pub fn from_row_col(row: u8, col: u8) -> Result<Self, MatchError> {
        if row > 2 || col > 2 {
            return Err(MatchError::OffBoard { row, col });
        }
        Self::from_index(row as usize * 3 + col as usize).ok_or(MatchError::OffBoard { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_row_col_round_trip_covers_every_cell() {
        for pos in Position::iter() {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Ok(pos));
        }
    }

    #[test]
    fn test_index_matches_row_major_order() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::BottomRight.to_index(), 8);
        assert_eq!(Position::from_index(9), None);
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
    }

    #[test]
    fn test_off_board_coordinates_rejected() {
        assert_eq!(
            Position::from_row_col(3, 0),
            Err(MatchError::OffBoard { row: 3, col: 0 })
        );
        assert_eq!(
            Position::from_row_col(0, 7),
            Err(MatchError::OffBoard { row: 0, col: 7 })
        );
    }
}
