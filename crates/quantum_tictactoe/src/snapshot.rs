//! Read-only match state for observers.
//!
//! [`MatchSnapshot`] is the complete state a dispatcher serializes after
//! every call. It includes every placement, so it must not be shown to a
//! player as-is: [`MatchSnapshot::view_for`] projects it down to what one
//! seat is allowed to see.

use super::action::Placement;
use super::engine::QuantumMatch;
use super::position::Position;
use super::rules;
use super::types::{BoardId, MatchStatus, Piece, PlayerId, Revealed};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete, serializable state of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchSnapshot {
    /// Lifecycle status.
    status: MatchStatus,
    /// Player in seat X.
    seat_x: Option<PlayerId>,
    /// Player in seat O.
    seat_o: Option<PlayerId>,
    /// Every recorded placement, in order.
    moves: Vec<Placement>,
    /// Cells exposed by collisions.
    revealed: Revealed,
    /// Boards won by X.
    x_score: u8,
    /// Boards won by O.
    o_score: u8,
    /// Winning player once over; `None` on a tie or before the end.
    winner: Option<PlayerId>,
    /// Piece whose turn it is while in progress.
    to_move: Option<Piece>,
}

impl From<&QuantumMatch> for MatchSnapshot {
    fn from(game: &QuantumMatch) -> Self {
        Self {
            status: game.status(),
            seat_x: game.seat_x().cloned(),
            seat_o: game.seat_o().cloned(),
            moves: game.moves().to_vec(),
            revealed: *game.revealed(),
            x_score: game.x_score(),
            o_score: game.o_score(),
            winner: game.winner().cloned(),
            to_move: game.to_move(),
        }
    }
}

impl MatchSnapshot {
    /// Winner of one board, derived from the recorded placements.
    pub fn board_winner(&self, board: BoardId) -> Option<Piece> {
        rules::board_winner(&self.moves, board)
    }

    /// Projects the snapshot onto what `seat` may see.
    ///
    /// Own placements are always shown. Opponent placements appear only on
    /// cells revealed by a collision.
    #[instrument(skip(self))]
    pub fn view_for(&self, seat: Piece) -> SeatView {
        let boards = BoardId::ALL.map(|board| {
            let mut cells = [[ViewCell::Unknown; 3]; 3];
            for placement in self.moves.iter().filter(|m| m.board == board) {
                let cell = &mut cells[placement.row() as usize][placement.col() as usize];
                if placement.piece == seat {
                    *cell = ViewCell::Mine;
                } else if self.revealed.is_revealed(board, placement.position) {
                    *cell = ViewCell::Theirs;
                }
            }
            BoardView {
                board,
                cells,
                winner: self.board_winner(board),
            }
        });

        SeatView {
            seat,
            status: self.status,
            boards,
            x_score: self.x_score,
            o_score: self.o_score,
            winner: self.winner.clone(),
            to_move: self.to_move,
        }
    }
}

/// What a seat sees of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewCell {
    /// Empty, or held by an unrevealed opponent placement.
    Unknown,
    /// Held by the viewing seat.
    Mine,
    /// Held by the opponent and revealed by a collision.
    Theirs,
}

/// One board as seen by a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardView {
    /// Board label.
    board: BoardId,
    /// Cells by row, then column.
    cells: [[ViewCell; 3]; 3],
    /// Side that completed a line on this board.
    winner: Option<Piece>,
}

impl BoardView {
    /// The cell at `position`.
    pub fn cell(&self, position: Position) -> ViewCell {
        self.cells[position.row() as usize][position.col() as usize]
    }
}

/// Redacted state for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SeatView {
    /// The viewing seat.
    seat: Piece,
    /// Lifecycle status.
    status: MatchStatus,
    /// Boards A, B and C.
    boards: [BoardView; 3],
    /// Boards won by X.
    x_score: u8,
    /// Boards won by O.
    o_score: u8,
    /// Winning player once over.
    winner: Option<PlayerId>,
    /// Piece whose turn it is while in progress.
    to_move: Option<Piece>,
}

impl SeatView {
    /// The view of one board.
    pub fn board(&self, board: BoardId) -> &BoardView {
        &self.boards[board.index()]
    }
}
