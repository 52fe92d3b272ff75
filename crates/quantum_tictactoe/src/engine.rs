//! Quantum match engine.
//!
//! One [`QuantumMatch`] owns the state of a single match between seats X
//! and O across boards A, B and C. Every operation runs to completion
//! against `&mut self`; a rejected call leaves the match untouched.

use super::action::{Attempt, LeaveOutcome, MatchError, MoveOutcome, Placement};
use super::contracts::LegalAttempt;
use super::position::Position;
use super::rules;
use super::snapshot::MatchSnapshot;
use super::types::{BoardId, MatchStatus, Piece, PlayerId, Revealed};
use tracing::{debug, info, instrument};

#[cfg(debug_assertions)]
use super::contracts::{AttemptContract, Contract};

/// Mutable state of one quantum tic-tac-toe match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantumMatch {
    pub(crate) seat_x: Option<PlayerId>,
    pub(crate) seat_o: Option<PlayerId>,
    pub(crate) status: MatchStatus,
    pub(crate) moves: Vec<Placement>,
    pub(crate) revealed: Revealed,
    pub(crate) x_score: u8,
    pub(crate) o_score: u8,
    pub(crate) attempt_count: u64,
    pub(crate) winner: Option<PlayerId>,
}

impl QuantumMatch {
    /// Creates an empty match waiting for players.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    //  Seats
    // ─────────────────────────────────────────────────────────────

    /// Seats a player: X if free, otherwise O.
    ///
    /// Filling the second seat starts the match and resets the attempt clock.
    ///
    /// # Errors
    ///
    /// - [`MatchError::AlreadySeated`] if the player holds a seat
    /// - [`MatchError::Full`] if both seats are taken
    #[instrument(skip_all)]
    pub fn join(&mut self, player: impl Into<PlayerId>) -> Result<Piece, MatchError> {
        let player = player.into();

        if self.piece_of(&player).is_some() {
            debug!(%player, "Player already seated");
            return Err(MatchError::AlreadySeated { player });
        }

        let piece = if self.seat_x.is_none() {
            self.seat_x = Some(player);
            Piece::X
        } else if self.seat_o.is_none() {
            self.seat_o = Some(player);
            Piece::O
        } else {
            debug!(%player, "Both seats taken");
            return Err(MatchError::Full);
        };
        debug!(%piece, player = ?self.seat(piece), "Player seated");

        if self.seat_x.is_some() && self.seat_o.is_some() {
            self.status = MatchStatus::InProgress;
            self.attempt_count = 0;
            info!("Both seats filled, match in progress");
        }

        Ok(piece)
    }

    /// Removes a player.
    ///
    /// With the other seat empty the match resets to a fresh waiting state.
    /// With both seats filled the match ends and the remaining player wins
    /// by forfeit. Leaving a match that is already over changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotSeated`] if the player holds no seat.
    #[instrument(skip_all, fields(player = %player))]
    pub fn leave(&mut self, player: &PlayerId) -> Result<LeaveOutcome, MatchError> {
        let piece = self.piece_of(player).ok_or_else(|| MatchError::NotSeated {
            player: player.clone(),
        })?;

        if self.status == MatchStatus::Over {
            debug!("Match already over");
            return Ok(LeaveOutcome::Retired);
        }

        match self.seat(piece.opponent()).cloned() {
            None => {
                *self = Self::new();
                info!("Match reset");
                Ok(LeaveOutcome::Reset)
            }
            Some(remaining) => {
                self.status = MatchStatus::Over;
                self.winner = Some(remaining.clone());
                info!(winner = %remaining, "Match forfeited");
                Ok(LeaveOutcome::Forfeited { winner: remaining })
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Attempts to claim `position` on `board` for `player`.
    ///
    /// A legal attempt always advances the attempt clock. If the opponent
    /// already holds the cell, the cell is revealed and nothing is recorded
    /// ([`MoveOutcome::Collided`]); otherwise the placement is appended
    /// ([`MoveOutcome::Placed`]). Scores and status are re-derived after
    /// both outcomes.
    ///
    /// # Errors
    ///
    /// In order of precedence: [`MatchError::NotInProgress`],
    /// [`MatchError::NotInGame`], [`MatchError::BoardAlreadyWon`],
    /// [`MatchError::CellAlreadyOwnedBySelf`], [`MatchError::OutOfTurn`].
    #[instrument(skip_all, fields(player = %player, board = %board, position = %position))]
    pub fn apply_move(
        &mut self,
        player: &PlayerId,
        board: BoardId,
        position: Position,
    ) -> Result<MoveOutcome, MatchError> {
        let attempt = Attempt::new(player.clone(), board, position);
        let piece = LegalAttempt::check(self, &attempt).inspect_err(|e| {
            debug!(error = %e, "Attempt rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let outcome = if self.has_placement(piece.opponent(), board, position) {
            self.revealed.reveal(board, position);
            MoveOutcome::Collided {
                board,
                position,
                piece,
            }
        } else {
            let placement = Placement::new(board, position, piece);
            self.moves.push(placement);
            MoveOutcome::Placed(placement)
        };
        self.attempt_count += 1;

        self.refresh_scores();
        self.refresh_status();

        #[cfg(debug_assertions)]
        {
            let verdict = AttemptContract::post(&before, self);
            debug_assert!(verdict.is_ok(), "{}", verdict.err().unwrap_or_default());
        }

        debug!(
            %outcome,
            attempt_count = self.attempt_count,
            x_score = self.x_score,
            o_score = self.o_score,
            status = %self.status,
            "Attempt applied"
        );

        Ok(outcome)
    }

    /// Re-derives both scores from the recorded placements.
    fn refresh_scores(&mut self) {
        let score = rules::tally(&self.moves);
        self.x_score = score.x;
        self.o_score = score.o;
    }

    /// Ends the match once a side has two boards or no board can change.
    fn refresh_status(&mut self) {
        let score = self.scoreboard();
        let settled = BoardId::ALL
            .into_iter()
            .all(|board| rules::is_settled(&self.moves, board));

        if score.is_decisive() || settled {
            self.status = MatchStatus::Over;
            self.winner = score.leader().and_then(|piece| self.seat(piece).cloned());
            info!(winner = ?self.winner, x_score = score.x, o_score = score.o, "Match over");
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns the player in seat X.
    pub fn seat_x(&self) -> Option<&PlayerId> {
        self.seat_x.as_ref()
    }

    /// Returns the player in seat O.
    pub fn seat_o(&self) -> Option<&PlayerId> {
        self.seat_o.as_ref()
    }

    /// Returns the player holding the seat of `piece`.
    pub fn seat(&self, piece: Piece) -> Option<&PlayerId> {
        match piece {
            Piece::X => self.seat_x(),
            Piece::O => self.seat_o(),
        }
    }

    /// Resolves the piece of a seated player.
    pub fn piece_of(&self, player: &PlayerId) -> Option<Piece> {
        if self.seat_x.as_ref() == Some(player) {
            Some(Piece::X)
        } else if self.seat_o.as_ref() == Some(player) {
            Some(Piece::O)
        } else {
            None
        }
    }

    /// Recorded placements, in order.
    pub fn moves(&self) -> &[Placement] {
        &self.moves
    }

    /// Cells revealed by collisions.
    pub fn revealed(&self) -> &Revealed {
        &self.revealed
    }

    /// Boards won by X.
    pub fn x_score(&self) -> u8 {
        self.x_score
    }

    /// Boards won by O.
    pub fn o_score(&self) -> u8 {
        self.o_score
    }

    /// Both scores.
    pub fn scoreboard(&self) -> rules::Scoreboard {
        rules::Scoreboard {
            x: self.x_score,
            o: self.o_score,
        }
    }

    /// Number of legal attempts since the match started.
    pub fn attempt_count(&self) -> u64 {
        self.attempt_count
    }

    /// The winning player, once the match is over. `None` on a tie.
    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner.as_ref()
    }

    /// The piece whose turn it is, while the match is in progress.
    pub fn to_move(&self) -> Option<Piece> {
        (self.status == MatchStatus::InProgress).then(|| Piece::for_attempt(self.attempt_count))
    }

    /// Winner of a single board.
    pub fn board_winner(&self, board: BoardId) -> Option<Piece> {
        rules::board_winner(&self.moves, board)
    }

    /// The placement recorded on a cell, if any.
    pub fn placement_at(&self, board: BoardId, position: Position) -> Option<&Placement> {
        self.moves
            .iter()
            .find(|m| m.board == board && m.position == position)
    }

    /// Checks whether `piece` has a placement on the cell.
    pub fn has_placement(&self, piece: Piece, board: BoardId, position: Position) -> bool {
        self.moves
            .iter()
            .any(|m| m.piece == piece && m.board == board && m.position == position)
    }

    /// Read-only copy of the full state.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(self)
    }
}
