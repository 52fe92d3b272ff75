//! Single-claim invariant: a cell holds at most one recorded placement.

use super::Invariant;
use crate::engine::QuantumMatch;
use crate::types::{Grid, Square};

/// Invariant: no two recorded placements share a cell.
///
/// A piece may never re-claim its own cell, and a claim on the opponent's
/// cell is a collision that records nothing. Replaying the history onto
/// empty grids must therefore never hit an occupied square.
pub struct SingleClaimInvariant;

impl Invariant<QuantumMatch> for SingleClaimInvariant {
    fn holds(game: &QuantumMatch) -> bool {
        let mut grids = [Grid::new(), Grid::new(), Grid::new()];

        for placement in game.moves() {
            let grid = &mut grids[placement.board.index()];
            if !grid.is_empty(placement.position) {
                return false;
            }
            grid.set(placement.position, Square::Occupied(placement.piece));
        }

        true
    }

    fn description() -> &'static str {
        "Each cell holds at most one recorded placement"
    }
}
