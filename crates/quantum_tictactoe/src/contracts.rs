//! Contract-based validation for move attempts.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} attempt {Q}

use super::action::{Attempt, MatchError};
use super::engine::QuantumMatch;
use super::invariants::{InvariantSet, QuantumInvariants};
use super::position::Position;
use super::rules;
use super::types::{BoardId, MatchStatus, Piece, PlayerId};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MatchError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), String>;
}

// ─────────────────────────────────────────────────────────────
//  Attempt Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match must be in progress.
pub struct MatchRunning;

impl MatchRunning {
    /// Rejects attempts outside `InProgress`.
    pub fn check(game: &QuantumMatch) -> Result<(), MatchError> {
        match game.status() {
            MatchStatus::InProgress => Ok(()),
            status => Err(MatchError::NotInProgress { status }),
        }
    }
}

/// Precondition: the mover holds a seat. Resolves the mover's piece.
pub struct SeatHolder;

impl SeatHolder {
    /// Returns the piece of the seat `player` holds.
    pub fn check(game: &QuantumMatch, player: &PlayerId) -> Result<Piece, MatchError> {
        game.piece_of(player).ok_or_else(|| MatchError::NotInGame {
            player: player.clone(),
        })
    }
}

/// Precondition: the target board has no three-in-a-row yet.
pub struct BoardOpen;

impl BoardOpen {
    /// Evaluates the board fresh from the recorded placements.
    pub fn check(game: &QuantumMatch, board: BoardId) -> Result<(), MatchError> {
        match rules::board_winner(game.moves(), board) {
            Some(_) => Err(MatchError::BoardAlreadyWon { board }),
            None => Ok(()),
        }
    }
}

/// Precondition: the mover has not already placed on the target cell.
pub struct CellNotOwned;

impl CellNotOwned {
    /// Rejects a second claim of the mover's own placement.
    pub fn check(
        game: &QuantumMatch,
        piece: Piece,
        board: BoardId,
        position: Position,
    ) -> Result<(), MatchError> {
        if game.has_placement(piece, board, position) {
            Err(MatchError::CellAlreadyOwnedBySelf {
                board,
                position,
                piece,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the attempt clock parity matches the mover.
pub struct PlayersTurn;

impl PlayersTurn {
    /// X moves on even attempts, O on odd ones.
    pub fn check(game: &QuantumMatch, piece: Piece) -> Result<(), MatchError> {
        if game.attempt_count() % 2 == piece.turn_parity() {
            Ok(())
        } else {
            Err(MatchError::OutOfTurn { piece })
        }
    }
}

/// Composite precondition for an attempt, in canonical order:
/// running, seated, board open, cell not owned, turn.
pub struct LegalAttempt;

impl LegalAttempt {
    /// Validates all preconditions and returns the mover's piece.
    #[instrument(skip_all, fields(attempt = %attempt))]
    pub fn check(game: &QuantumMatch, attempt: &Attempt) -> Result<Piece, MatchError> {
        MatchRunning::check(game)?;
        let piece = SeatHolder::check(game, &attempt.player)?;
        BoardOpen::check(game, attempt.board)?;
        CellNotOwned::check(game, piece, attempt.board, attempt.position)?;
        PlayersTurn::check(game, piece)?;
        debug!(%piece, "Attempt is legal");
        Ok(piece)
    }
}

// ─────────────────────────────────────────────────────────────
//  Attempt Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move attempts.
///
/// Preconditions: [`LegalAttempt`].
///
/// Postconditions:
/// - the attempt clock advanced by exactly one
/// - earlier placements are untouched and at most one was appended
/// - revealed cells were never hidden again
/// - all [`QuantumInvariants`] hold
pub struct AttemptContract;

impl Contract<QuantumMatch, Attempt> for AttemptContract {
    fn pre(game: &QuantumMatch, attempt: &Attempt) -> Result<(), MatchError> {
        LegalAttempt::check(game, attempt).map(|_| ())
    }

    fn post(before: &QuantumMatch, after: &QuantumMatch) -> Result<(), String> {
        let mut failures = Vec::new();

        if after.attempt_count() != before.attempt_count() + 1 {
            failures.push("attempt clock must advance by exactly one".to_string());
        }

        let prior = before.moves();
        let appended = after.moves().len().saturating_sub(prior.len());
        if appended > 1 || !after.moves().starts_with(prior) {
            failures.push("recorded placements are append-only, one per attempt".to_string());
        }

        if before
            .revealed()
            .cells()
            .any(|(board, pos)| !after.revealed().is_revealed(board, pos))
        {
            failures.push("revealed cells stay revealed".to_string());
        }

        if let Err(violations) = QuantumInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(format!("Postcondition failed: {}", failures.join("; ")))
        }
    }
}
