//! qttt - Quantum tic-tac-toe CLI

use anyhow::{Context, Result};
use clap::Parser;
use quantum_cli::cli::{Cli, Command};
use quantum_cli::{MatchSession, OutputOptions, QtttConfig, parse_line, parse_transcript};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = QtttConfig::load(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);

    let output = OutputOptions {
        json: cli.json || *config.json(),
        viewer: cli.viewer.or(*config.viewer()),
    };

    match cli.command {
        Command::Replay { file, strict } => run_replay(&file, strict || *config.strict(), output),
        Command::Play => run_play(output),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(config: &QtttConfig, verbose: u8) {
    let fallback = match verbose {
        0 => config.log_filter().as_str(),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Replay a transcript file and print the final state
#[instrument(skip(output), fields(file = %file.display()))]
fn run_replay(file: &Path, strict: bool, output: OutputOptions) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read transcript {}", file.display()))?;
    let commands = parse_transcript(&text)
        .with_context(|| format!("Failed to parse transcript {}", file.display()))?;
    info!(commands = commands.len(), "Replaying transcript");

    let mut session = MatchSession::new();
    let reports = session.replay(commands, strict)?;

    let mut stdout = std::io::stdout().lock();
    let snapshot = session.snapshot();
    for report in &reports {
        writeln!(stdout, "{}", output.render_report(report, &snapshot)?)?;
    }
    writeln!(stdout, "{}", output.render_state(&snapshot)?)?;
    Ok(())
}

/// Read commands from stdin and print the state after each
#[instrument(skip(output))]
fn run_play(output: OutputOptions) -> Result<()> {
    let mut session = MatchSession::new();
    let mut stdout = std::io::stdout().lock();

    for (index, line) in std::io::stdin().lock().lines().enumerate() {
        let line = line.context("Failed to read stdin")?;
        let command = match parse_line(index + 1, &line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(error = %err, "Skipping unparsable line");
                eprintln!("{err}");
                continue;
            }
        };

        let report = session.execute(command);
        let snapshot = session.snapshot();
        writeln!(stdout, "{}", output.render_report(&report, &snapshot)?)?;
        writeln!(stdout, "{}", output.render_state(&snapshot)?)?;
        stdout.flush()?;
    }

    info!(commands = session.executed(), "Input closed");
    Ok(())
}
