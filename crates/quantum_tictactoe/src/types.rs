//! Core domain types for quantum tic-tac-toe.

use super::action::{MatchError, Placement};
use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Piece placed by a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Piece {
    /// Seat X (moves on even attempts).
    #[serde(alias = "x")]
    X,
    /// Seat O (moves on odd attempts).
    #[serde(alias = "o")]
    O,
}

impl Piece {
    /// Returns the opposing piece.
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Parity of the attempt clock on which this piece may move.
    pub fn turn_parity(self) -> u64 {
        match self {
            Piece::X => 0,
            Piece::O => 1,
        }
    }

    /// Returns the piece whose turn it is after `attempt_count` attempts.
    pub fn for_attempt(attempt_count: u64) -> Self {
        if attempt_count % 2 == Piece::X.turn_parity() {
            Piece::X
        } else {
            Piece::O
        }
    }
}

/// One of the three independent boards of a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum BoardId {
    /// Board A.
    A,
    /// Board B.
    B,
    /// Board C.
    C,
}

impl BoardId {
    /// All boards in label order.
    pub const ALL: [BoardId; 3] = [BoardId::A, BoardId::B, BoardId::C];

    /// Parses a board label (`A`, `B` or `C`, any case).
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownBoard`] for any other label.
    pub fn parse(label: &str) -> Result<Self, MatchError> {
        label.trim().parse().map_err(|_| MatchError::UnknownBoard {
            label: label.to_string(),
        })
    }

    /// Index of the board (0-2).
    pub fn index(self) -> usize {
        match self {
            BoardId::A => 0,
            BoardId::B => 1,
            BoardId::C => 2,
        }
    }
}

/// Lifecycle status of a match.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Fewer than two seats are filled.
    #[default]
    WaitingToStart,
    /// Both seats are filled and no terminal condition has been met.
    InProgress,
    /// Terminal. The match is retired.
    Over,
}

/// Opaque identifier of a player, supplied by the caller.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a player identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A square on one 3x3 grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a recorded placement.
    Occupied(Piece),
}

/// 3x3 grid rebuilt from the placements recorded on one board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Grid {
    /// Creates a new empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the grid of `board` from a match's recorded placements.
    pub fn from_placements(moves: &[Placement], board: BoardId) -> Self {
        let mut grid = Self::new();
        for placement in moves.iter().filter(|m| m.board == board) {
            grid.set(placement.position, Square::Occupied(placement.piece));
        }
        grid
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

/// Per-board record of cells exposed by collisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RevealedRecord", into = "RevealedRecord")]
pub struct Revealed {
    cells: [[[bool; 3]; 3]; 3],
}

impl Revealed {
    /// Returns true once a collision has happened at the cell.
    pub fn is_revealed(&self, board: BoardId, pos: Position) -> bool {
        self.cells[board.index()][pos.row() as usize][pos.col() as usize]
    }

    /// Marks the cell as revealed.
    pub fn reveal(&mut self, board: BoardId, pos: Position) {
        self.cells[board.index()][pos.row() as usize][pos.col() as usize] = true;
    }

    /// Row-major reveal flags of one board.
    pub fn board(&self, board: BoardId) -> &[[bool; 3]; 3] {
        &self.cells[board.index()]
    }

    /// Iterates over every revealed cell.
    pub fn cells(&self) -> impl Iterator<Item = (BoardId, Position)> + '_ {
        BoardId::ALL.into_iter().flat_map(move |board| {
            Position::ALL
                .into_iter()
                .filter(move |pos| self.is_revealed(board, *pos))
                .map(move |pos| (board, pos))
        })
    }

    /// Number of revealed cells across all boards.
    pub fn count(&self) -> usize {
        self.cells().count()
    }
}

/// Wire shape of [`Revealed`]: one grid per board label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RevealedRecord {
    #[serde(rename = "A")]
    a: [[bool; 3]; 3],
    #[serde(rename = "B")]
    b: [[bool; 3]; 3],
    #[serde(rename = "C")]
    c: [[bool; 3]; 3],
}

impl From<RevealedRecord> for Revealed {
    fn from(record: RevealedRecord) -> Self {
        Self {
            cells: [record.a, record.b, record.c],
        }
    }
}

impl From<Revealed> for RevealedRecord {
    fn from(revealed: Revealed) -> Self {
        let [a, b, c] = revealed.cells;
        Self { a, b, c }
    }
}
