//! Quantum tic-tac-toe rules engine
//!
//! Two seats, X and O, alternate single attempts across three independent
//! 3x3 boards. Claiming a cell the opponent already holds is a collision:
//! the cell is revealed, nothing is recorded, and the turn is still spent.
//! The first side to win two boards takes the match.
//!
//! # Architecture
//!
//! - **Engine**: [`QuantumMatch`] owns one match and exposes `join`,
//!   `leave` and `apply_move`
//! - **Rules**: pure per-board evaluation (win, exhaustion, scores)
//! - **Contracts**: the ordered validation chain every attempt passes
//! - **Invariants**: properties checked after every accepted attempt
//! - **Snapshot**: serializable state and redacted per-seat views
//!
//! # Example
//!
//! ```
//! use quantum_tictactoe::{BoardId, MatchStatus, PlayerId, Position, QuantumMatch};
//!
//! let mut game = QuantumMatch::new();
//! game.join("alice")?;
//! game.join("bob")?;
//! assert_eq!(game.status(), MatchStatus::InProgress);
//!
//! let alice = PlayerId::from("alice");
//! let bob = PlayerId::from("bob");
//! game.apply_move(&alice, BoardId::A, Position::Center)?;
//! let outcome = game.apply_move(&bob, BoardId::A, Position::Center)?;
//! assert!(outcome.is_collision());
//! assert_eq!(game.attempt_count(), 2);
//! # Ok::<(), quantum_tictactoe::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Attempt, LeaveOutcome, MatchError, MoveOutcome, Placement};
pub use contracts::{
    AttemptContract, BoardOpen, CellNotOwned, Contract, LegalAttempt, MatchRunning, PlayersTurn,
    SeatHolder,
};
pub use engine::QuantumMatch;
pub use invariants::{
    AttemptClockInvariant, DerivedScoreInvariant, Invariant, InvariantSet, InvariantViolation,
    QuantumInvariants, SingleClaimInvariant,
};
pub use position::Position;
pub use rules::{BOARDS_TO_WIN, Scoreboard};
pub use snapshot::{BoardView, MatchSnapshot, SeatView, ViewCell};
pub use types::{BoardId, Grid, MatchStatus, Piece, PlayerId, Revealed, Square};
