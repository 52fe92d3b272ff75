//! Derived-score invariant: stored scores always match the boards.

use super::Invariant;
use crate::engine::QuantumMatch;
use crate::rules;

/// Invariant: `x_score`/`o_score` equal the scores re-derived from the
/// recorded placements, and together never exceed the number of boards.
pub struct DerivedScoreInvariant;

impl Invariant<QuantumMatch> for DerivedScoreInvariant {
    fn holds(game: &QuantumMatch) -> bool {
        let derived = rules::tally(game.moves());
        derived.x == game.x_score()
            && derived.o == game.o_score()
            && game.x_score() + game.o_score() <= 3
    }

    fn description() -> &'static str {
        "Scores are re-derivable from recorded placements and sum to at most 3"
    }
}
