//! qttt - local driver for quantum tic-tac-toe matches
//!
//! Reads line-oriented transcripts (`join`, `leave`, `move`), executes them
//! against a [`quantum_tictactoe::QuantumMatch`] and prints the resulting
//! state as text boards or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod render;
pub mod session;
pub mod transcript;

pub use config::{ConfigError, QtttConfig};
pub use render::{OutputOptions, SnapshotText, ViewText};
pub use session::{CommandOutcome, CommandReport, MatchSession, ReplayError};
pub use transcript::{MatchCommand, TranscriptError, parse_line, parse_transcript};
