//! Sequential command execution against one match.

use crate::transcript::MatchCommand;
use derive_more::{Display, Error};
use quantum_tictactoe::{
    LeaveOutcome, MatchError, MatchSnapshot, MoveOutcome, Piece, QuantumMatch,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What an accepted command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    /// The player took a seat.
    Joined(Piece),
    /// The player left.
    Left(LeaveOutcome),
    /// The attempt was accepted.
    Moved(MoveOutcome),
}

impl std::fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutcome::Joined(piece) => write!(f, "seated as {piece}"),
            CommandOutcome::Left(outcome) => write!(f, "{outcome}"),
            CommandOutcome::Moved(outcome) => write!(f, "{outcome}"),
        }
    }
}

/// One executed command and its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    /// 1-based position of the command in the session.
    pub index: usize,
    /// The command as issued.
    pub command: MatchCommand,
    /// Engine result.
    pub result: Result<CommandOutcome, MatchError>,
}

impl CommandReport {
    /// Returns true if the engine rejected the command.
    pub fn is_rejected(&self) -> bool {
        self.result.is_err()
    }
}

impl std::fmt::Display for CommandReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Ok(outcome) => write!(f, "#{} {}: {}", self.index, self.command, outcome),
            Err(err) => write!(f, "#{} {}: rejected: {}", self.index, self.command, err),
        }
    }
}

/// A strict replay stopped at a rejected command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("command #{index} ({command}) rejected: {source}")]
pub struct ReplayError {
    /// 1-based position of the rejected command.
    pub index: usize,
    /// The rejected command.
    pub command: MatchCommand,
    /// Why the engine rejected it.
    pub source: MatchError,
}

/// A match driven by a sequence of commands.
#[derive(Debug, Clone, Default)]
pub struct MatchSession {
    game: QuantumMatch,
    executed: usize,
}

impl MatchSession {
    /// Creates a session around a fresh match.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new match session");
        Self::default()
    }

    /// The match being driven.
    pub fn game(&self) -> &QuantumMatch {
        &self.game
    }

    /// Current state of the match.
    pub fn snapshot(&self) -> MatchSnapshot {
        self.game.snapshot()
    }

    /// Number of commands executed so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Executes one command. Engine rejections are reported, not raised.
    #[instrument(skip_all, fields(index = self.executed + 1, command = %command))]
    pub fn execute(&mut self, command: MatchCommand) -> CommandReport {
        self.executed += 1;

        let result = match &command {
            MatchCommand::Join { player } => {
                self.game.join(player.clone()).map(CommandOutcome::Joined)
            }
            MatchCommand::Leave { player } => self.game.leave(player).map(CommandOutcome::Left),
            MatchCommand::Move {
                player,
                board,
                position,
            } => self
                .game
                .apply_move(player, *board, *position)
                .map(CommandOutcome::Moved),
        };

        match &result {
            Ok(outcome) => info!(%outcome, status = %self.game.status(), "Command accepted"),
            Err(err) => warn!(error = %err, "Command rejected"),
        }

        CommandReport {
            index: self.executed,
            command,
            result,
        }
    }

    /// Executes every command in order.
    ///
    /// In strict mode the first rejection stops the replay.
    #[instrument(skip(self, commands))]
    pub fn replay(
        &mut self,
        commands: impl IntoIterator<Item = MatchCommand>,
        strict: bool,
    ) -> Result<Vec<CommandReport>, ReplayError> {
        let mut reports = Vec::new();
        for command in commands {
            let report = self.execute(command);
            if strict && let Err(source) = &report.result {
                return Err(ReplayError {
                    index: report.index,
                    command: report.command,
                    source: source.clone(),
                });
            }
            reports.push(report);
        }

        let rejected = reports.iter().filter(|r| r.is_rejected()).count();
        debug!(commands = reports.len(), rejected, "Replay finished");
        Ok(reports)
    }
}
