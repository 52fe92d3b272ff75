//! Attempt-clock invariant: the turn clock accounts for every placement and
//! every revealed cell.

use super::Invariant;
use crate::engine::QuantumMatch;
use crate::types::Piece;

/// Invariant: the attempt clock is consistent with the recorded history.
///
/// - X moves on even attempts and O on odd ones, so neither side can hold
///   more placements than attempts it was given.
/// - A collision needs an opponent placement, so every revealed cell holds
///   a recorded placement.
pub struct AttemptClockInvariant;

impl Invariant<QuantumMatch> for AttemptClockInvariant {
    fn holds(game: &QuantumMatch) -> bool {
        let attempts = game.attempt_count() as usize;
        let x_turns = attempts.div_ceil(2);
        let o_turns = attempts / 2;

        let placed = |piece: Piece| game.moves().iter().filter(|m| m.piece == piece).count();
        if placed(Piece::X) > x_turns || placed(Piece::O) > o_turns {
            return false;
        }

        game.revealed()
            .cells()
            .all(|(board, pos)| game.placement_at(board, pos).is_some())
    }

    fn description() -> &'static str {
        "Attempt clock covers every placement and every revealed cell"
    }
}
