//! Line-oriented match transcripts.
//!
//! One command per line:
//!
//! ```text
//! join alice
//! join bob
//! move alice A 0 0
//! leave bob
//! ```
//!
//! Blank lines and everything after `#` are ignored.

use derive_more::{Display, Error};
use quantum_tictactoe::{BoardId, PlayerId, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single driver command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MatchCommand {
    /// Seat a player.
    Join {
        /// Joining player.
        player: PlayerId,
    },
    /// Remove a player.
    Leave {
        /// Leaving player.
        player: PlayerId,
    },
    /// Attempt a cell.
    Move {
        /// Moving player.
        player: PlayerId,
        /// Target board.
        board: BoardId,
        /// Target cell.
        position: Position,
    },
}

impl MatchCommand {
    /// The player issuing the command.
    pub fn player(&self) -> &PlayerId {
        match self {
            MatchCommand::Join { player }
            | MatchCommand::Leave { player }
            | MatchCommand::Move { player, .. } => player,
        }
    }
}

impl std::fmt::Display for MatchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchCommand::Join { player } => write!(f, "join {player}"),
            MatchCommand::Leave { player } => write!(f, "leave {player}"),
            MatchCommand::Move {
                player,
                board,
                position,
            } => write!(
                f,
                "move {player} {board} {} {}",
                position.row(),
                position.col()
            ),
        }
    }
}

/// A transcript line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("line {line}: {message}")]
pub struct TranscriptError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub message: String,
}

impl TranscriptError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Parses one transcript line.
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(line: usize, text: &str) -> Result<Option<MatchCommand>, TranscriptError> {
    let text = text.split('#').next().unwrap_or_default().trim();
    let words: Vec<&str> = text.split_whitespace().collect();

    let command = match words.as_slice() {
        [] => return Ok(None),
        ["join", player] => MatchCommand::Join {
            player: PlayerId::from(*player),
        },
        ["leave", player] => MatchCommand::Leave {
            player: PlayerId::from(*player),
        },
        ["move", player, board, row, col] => {
            let board =
                BoardId::parse(board).map_err(|e| TranscriptError::new(line, e.to_string()))?;
            let row = parse_coordinate(line, "row", row)?;
            let col = parse_coordinate(line, "column", col)?;
            let position = Position::from_row_col(row, col)
                .map_err(|e| TranscriptError::new(line, e.to_string()))?;
            MatchCommand::Move {
                player: PlayerId::from(*player),
                board,
                position,
            }
        }
        [verb @ ("join" | "leave" | "move"), ..] => {
            return Err(TranscriptError::new(
                line,
                format!("wrong number of arguments for {verb}"),
            ));
        }
        [verb, ..] => {
            return Err(TranscriptError::new(line, format!("unknown command {verb:?}")));
        }
    };

    Ok(Some(command))
}

fn parse_coordinate(line: usize, what: &str, word: &str) -> Result<u8, TranscriptError> {
    word.parse()
        .map_err(|_| TranscriptError::new(line, format!("{what} {word:?} is not a number")))
}

/// Parses a whole transcript, stopping at the first bad line.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_transcript(text: &str) -> Result<Vec<MatchCommand>, TranscriptError> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, raw)? {
            commands.push(command);
        }
    }
    debug!(count = commands.len(), "Transcript parsed");
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_each_command() {
        assert_eq!(
            parse_line(1, "join alice").unwrap(),
            Some(MatchCommand::Join {
                player: "alice".into()
            })
        );
        assert_eq!(
            parse_line(2, "  move bob c 2 1  # corner").unwrap(),
            Some(MatchCommand::Move {
                player: "bob".into(),
                board: BoardId::C,
                position: Position::BottomCenter,
            })
        );
        assert_eq!(parse_line(3, "# just a note").unwrap(), None);
        assert_eq!(parse_line(4, "   ").unwrap(), None);
    }

    #[test]
    fn test_errors_carry_line_number() {
        let err = parse_line(7, "move bob D 0 0").unwrap_err();
        assert_eq!(err.line, 7);
        assert!(err.message.contains("Unknown board"));

        let err = parse_line(8, "move bob A 3 0").unwrap_err();
        assert!(err.message.contains("off the board"));

        let err = parse_line(9, "move bob A x 0").unwrap_err();
        assert_eq!(err.to_string(), "line 9: row \"x\" is not a number");

        assert!(parse_line(10, "join").is_err());
        assert!(parse_line(11, "dance alice").is_err());
    }

    #[test]
    fn test_display_reads_back() {
        let command = MatchCommand::Move {
            player: "alice".into(),
            board: BoardId::B,
            position: Position::MiddleLeft,
        };
        assert_eq!(command.to_string(), "move alice B 1 0");
        assert_eq!(parse_line(1, &command.to_string()).unwrap(), Some(command));
    }

    #[test]
    fn test_transcript_skips_blank_lines() {
        let text = "join alice\n\n# second seat\njoin bob\nmove alice A 1 1\n";
        let commands = parse_transcript(text).unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2].player().as_str(), "alice");

        let err = parse_transcript("join alice\nwave\n").unwrap_err();
        assert_eq!(err.line, 2);
    }
}
