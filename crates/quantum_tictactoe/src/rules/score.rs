//! Score derivation across the three boards.

use super::win::board_winner;
use crate::action::Placement;
use crate::types::{BoardId, Piece};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Boards a side must win to end the match outright.
pub const BOARDS_TO_WIN: u8 = 2;

/// Number of boards won by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Boards won by X.
    pub x: u8,
    /// Boards won by O.
    pub o: u8,
}

impl Scoreboard {
    /// Score of one side.
    pub fn of(&self, piece: Piece) -> u8 {
        match piece {
            Piece::X => self.x,
            Piece::O => self.o,
        }
    }

    /// The higher-scoring side, or `None` when level.
    pub fn leader(&self) -> Option<Piece> {
        match self.x.cmp(&self.o) {
            Ordering::Greater => Some(Piece::X),
            Ordering::Less => Some(Piece::O),
            Ordering::Equal => None,
        }
    }

    /// True once either side has won enough boards to end the match.
    pub fn is_decisive(&self) -> bool {
        self.x >= BOARDS_TO_WIN || self.o >= BOARDS_TO_WIN
    }
}

/// Re-derives both scores by evaluating every board independently.
#[instrument(level = "trace", skip(moves))]
pub fn tally(moves: &[Placement]) -> Scoreboard {
    BoardId::ALL
        .into_iter()
        .filter_map(|board| board_winner(moves, board))
        .fold(Scoreboard::default(), |mut score, piece| {
            match piece {
                Piece::X => score.x += 1,
                Piece::O => score.o += 1,
            }
            score
        })
}
