//! First-class invariants for quantum tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a match.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn verdict(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        verdict(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        verdict(violations)
    }
}

pub mod attempt_clock;
pub mod derived_score;
pub mod single_claim;

pub use attempt_clock::AttemptClockInvariant;
pub use derived_score::DerivedScoreInvariant;
pub use single_claim::SingleClaimInvariant;

/// All match invariants as a composable set.
pub type QuantumInvariants = (
    SingleClaimInvariant,
    DerivedScoreInvariant,
    AttemptClockInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardId, Placement, Piece, PlayerId, Position, QuantumMatch};

    fn started() -> (QuantumMatch, PlayerId, PlayerId) {
        let mut game = QuantumMatch::new();
        game.join("x-player").unwrap();
        game.join("o-player").unwrap();
        (game, "x-player".into(), "o-player".into())
    }

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        assert!(QuantumInvariants::check_all(&QuantumMatch::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_collision() {
        let (mut game, x, o) = started();
        game.apply_move(&x, BoardId::A, Position::Center).unwrap();
        game.apply_move(&o, BoardId::A, Position::Center).unwrap();
        assert!(QuantumInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let (mut game, x, _) = started();
        game.apply_move(&x, BoardId::A, Position::Center).unwrap();
        game.moves.push(Placement::new(BoardId::A, Position::Center, Piece::O));
        game.x_score = 3;
        game.o_score = 1;

        let violations = QuantumInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let (game, _, _) = started();
        type TwoInvariants = (SingleClaimInvariant, DerivedScoreInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
