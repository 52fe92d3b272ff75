//! First-class action and outcome types for quantum tic-tac-toe.
//!
//! Attempts are domain events, not side effects. Each accepted attempt
//! resolves to a tagged [`MoveOutcome`], so the transition it caused can be
//! audited independently of the match that produced it.

use super::position::Position;
use super::types::{BoardId, MatchStatus, Piece, PlayerId};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A recorded placement. Permanent once appended to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
#[serde(into = "PlacementRecord", try_from = "PlacementRecord")]
pub struct Placement {
    /// Board the piece was placed on.
    pub board: BoardId,
    /// Cell within the board.
    pub position: Position,
    /// The piece placed.
    pub piece: Piece,
}

impl Placement {
    /// Row of the placement (0-2).
    pub fn row(&self) -> u8 {
        self.position.row()
    }

    /// Column of the placement (0-2).
    pub fn col(&self) -> u8 {
        self.position.col()
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}{}", self.piece, self.board, self.position)
    }
}

/// Wire shape of a placement: `{board, row, col, piece}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PlacementRecord {
    board: BoardId,
    row: u8,
    col: u8,
    piece: Piece,
}

impl From<Placement> for PlacementRecord {
    fn from(placement: Placement) -> Self {
        Self {
            board: placement.board,
            row: placement.row(),
            col: placement.col(),
            piece: placement.piece,
        }
    }
}

impl TryFrom<PlacementRecord> for Placement {
    type Error = MatchError;

    fn try_from(record: PlacementRecord) -> Result<Self, Self::Error> {
        let position = Position::from_row_col(record.row, record.col)?;
        Ok(Self::new(record.board, position, record.piece))
    }
}

/// A player's request to claim a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Attempt {
    /// The player making the attempt.
    pub player: PlayerId,
    /// Target board.
    pub board: BoardId,
    /// Target cell.
    pub position: Position,
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}{}", self.player, self.board, self.position)
    }
}

/// Result of an accepted attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The piece was recorded on the board.
    Placed(Placement),
    /// The opponent already held the cell. It is now revealed and the
    /// mover's turn is spent without recording anything.
    Collided {
        /// Board of the collision.
        board: BoardId,
        /// Cell of the collision.
        position: Position,
        /// The piece that attempted the cell.
        piece: Piece,
    },
}

impl MoveOutcome {
    /// Returns true for a collision.
    pub fn is_collision(&self) -> bool {
        matches!(self, MoveOutcome::Collided { .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Placed(placement) => write!(f, "placed {placement}"),
            MoveOutcome::Collided {
                board,
                position,
                piece,
            } => write!(f, "{piece} collided at {board}{position}"),
        }
    }
}

/// Result of a player leaving.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeaveOutcome {
    /// The other seat was never filled; the match is empty again.
    Reset,
    /// The remaining player wins by forfeit.
    Forfeited {
        /// The player left in the match.
        winner: PlayerId,
    },
    /// The match was already over; nothing changed.
    Retired,
}

impl std::fmt::Display for LeaveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveOutcome::Reset => write!(f, "match reset"),
            LeaveOutcome::Forfeited { winner } => write!(f, "{winner} wins by forfeit"),
            LeaveOutcome::Retired => write!(f, "match already over"),
        }
    }
}

/// Rejection of a single engine call. The match is left unchanged.
///
/// [`MatchError::kind`] names the variant without its fields.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum MatchError {
    /// The player already holds a seat.
    #[display("Player {player} already holds a seat")]
    AlreadySeated {
        /// The joining player.
        player: PlayerId,
    },

    /// Both seats are taken.
    #[display("Match already has two players")]
    Full,

    /// The player holds no seat.
    #[display("Player {player} does not hold a seat")]
    NotSeated {
        /// The leaving player.
        player: PlayerId,
    },

    /// Moves are only accepted while the match is in progress.
    #[display("Match is not in progress (status {status})")]
    NotInProgress {
        /// Status at the time of the attempt.
        status: MatchStatus,
    },

    /// The mover is not one of the two seated players.
    #[display("Player {player} is not in this match")]
    NotInGame {
        /// The moving player.
        player: PlayerId,
    },

    /// The board already has a three-in-a-row.
    #[display("Board {board} has already been won")]
    BoardAlreadyWon {
        /// The closed board.
        board: BoardId,
    },

    /// The mover already has a placement on that cell.
    #[display("{piece} already owns {board}{position}")]
    CellAlreadyOwnedBySelf {
        /// Target board.
        board: BoardId,
        /// Target cell.
        position: Position,
        /// The mover's piece.
        piece: Piece,
    },

    /// The attempt clock does not match the mover's parity.
    #[display("It's not {piece}'s turn")]
    OutOfTurn {
        /// The mover's piece.
        piece: Piece,
    },

    /// Raw coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OffBoard {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// A board label other than A, B or C.
    #[display("Unknown board {label:?}")]
    UnknownBoard {
        /// The label as given.
        label: String,
    },
}

impl MatchError {
    /// Snake-case name of the variant, e.g. `out_of_turn`.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}
