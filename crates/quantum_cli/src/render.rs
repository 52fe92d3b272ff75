//! Text and JSON rendering of match state.

use crate::session::{CommandOutcome, CommandReport};
use crate::transcript::MatchCommand;
use quantum_tictactoe::{
    BoardId, Grid, MatchSnapshot, MatchStatus, MoveOutcome, Piece, PlayerId, Position, SeatView,
    Square, ViewCell,
};
use serde_json::json;
use std::fmt;

/// How state and reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print JSON instead of text.
    pub json: bool,
    /// Print only what this seat may see.
    pub viewer: Option<Piece>,
}

impl OutputOptions {
    /// Renders the current state: the full snapshot, or the viewer's
    /// redacted view when a viewer is set.
    pub fn render_state(&self, snapshot: &MatchSnapshot) -> Result<String, serde_json::Error> {
        match (self.json, self.viewer) {
            (true, None) => serde_json::to_string_pretty(snapshot),
            (true, Some(seat)) => serde_json::to_string_pretty(&snapshot.view_for(seat)),
            (false, None) => Ok(SnapshotText(snapshot).to_string()),
            (false, Some(seat)) => Ok(ViewText(&snapshot.view_for(seat)).to_string()),
        }
    }

    /// Renders one command report.
    ///
    /// With a viewer set, opponent moves are reported without their board
    /// or cell, accepted or not. Collisions stay visible: they land on the
    /// viewer's own piece.
    pub fn render_report(
        &self,
        report: &CommandReport,
        snapshot: &MatchSnapshot,
    ) -> Result<String, serde_json::Error> {
        let hidden = self.hides(report, snapshot);

        if self.json {
            let value = match (&report.result, hidden) {
                (Ok(_), true) => json!({
                    "index": report.index,
                    "command": "move",
                    "player": report.command.player(),
                    "outcome": "hidden",
                }),
                (Err(err), true) => json!({
                    "index": report.index,
                    "command": "move",
                    "player": report.command.player(),
                    "error": err.kind(),
                }),
                (Ok(outcome), false) => json!({
                    "index": report.index,
                    "command": report.command,
                    "outcome": outcome,
                }),
                (Err(err), false) => json!({
                    "index": report.index,
                    "command": report.command,
                    "error": err.to_string(),
                }),
            };
            return serde_json::to_string(&value);
        }

        let player = report.command.player();
        match (&report.result, hidden) {
            (Ok(_), true) => Ok(format!("#{} {player} moved somewhere", report.index)),
            (Err(err), true) => Ok(format!(
                "#{} {player} attempted a move: rejected ({})",
                report.index,
                err.kind()
            )),
            (_, false) => Ok(report.to_string()),
        }
    }

    /// True for an opponent's move, other than a collision, while a viewer
    /// is set.
    fn hides(&self, report: &CommandReport, snapshot: &MatchSnapshot) -> bool {
        let Some(seat) = self.viewer else {
            return false;
        };
        let collided = matches!(
            report.result,
            Ok(CommandOutcome::Moved(MoveOutcome::Collided { .. }))
        );
        matches!(report.command, MatchCommand::Move { .. })
            && !collided
            && seat_of(snapshot, seat) != Some(report.command.player())
    }
}

fn seat_of(snapshot: &MatchSnapshot, piece: Piece) -> Option<&PlayerId> {
    match piece {
        Piece::X => snapshot.seat_x().as_ref(),
        Piece::O => snapshot.seat_o().as_ref(),
    }
}

/// Full text rendering of a snapshot. Shows every placement.
pub struct SnapshotText<'a>(pub &'a MatchSnapshot);

impl fmt::Display for SnapshotText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let grids = BoardId::ALL.map(|board| Grid::from_placements(snapshot.moves(), board));

        write_boards(
            f,
            BoardId::ALL.map(|board| header(board, snapshot.board_winner(board))),
            |board, pos| match grids[board.index()].get(pos) {
                Square::Occupied(piece) if snapshot.revealed().is_revealed(board, pos) => {
                    format!("{piece}*")
                }
                Square::Occupied(piece) => format!("{piece} "),
                Square::Empty => ". ".to_string(),
            },
        )?;

        writeln!(
            f,
            "X: {}  O: {}",
            player_label(snapshot.seat_x().as_ref()),
            player_label(snapshot.seat_o().as_ref())
        )?;
        write_status(
            f,
            *snapshot.status(),
            *snapshot.x_score(),
            *snapshot.o_score(),
            *snapshot.to_move(),
            snapshot.winner().as_ref(),
        )
    }
}

/// Text rendering of one seat's redacted view.
pub struct ViewText<'a>(pub &'a SeatView);

impl fmt::Display for ViewText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let seat = *view.seat();

        writeln!(f, "Viewing as {seat}")?;
        write_boards(
            f,
            view.boards().each_ref().map(|b| header(*b.board(), *b.winner())),
            |board, pos| match view.board(board).cell(pos) {
                ViewCell::Mine => format!("{seat} "),
                ViewCell::Theirs => format!("{}*", seat.opponent()),
                ViewCell::Unknown => ". ".to_string(),
            },
        )?;
        write_status(
            f,
            *view.status(),
            *view.x_score(),
            *view.o_score(),
            *view.to_move(),
            view.winner().as_ref(),
        )
    }
}

fn header(board: BoardId, winner: Option<Piece>) -> String {
    match winner {
        Some(piece) => format!("{board} won by {piece}"),
        None => board.to_string(),
    }
}

fn player_label(player: Option<&PlayerId>) -> String {
    player.map_or_else(|| "(open)".to_string(), PlayerId::to_string)
}

/// Writes the three boards side by side. Each cell renders as two chars.
fn write_boards(
    f: &mut fmt::Formatter<'_>,
    headers: [String; 3],
    cell: impl Fn(BoardId, Position) -> String,
) -> fmt::Result {
    let headers: Vec<String> = headers.iter().map(|h| format!("{h:<12}")).collect();
    writeln!(f, "{}", headers.join("").trim_end())?;

    for row in 0..3u8 {
        let mut line = String::new();
        for board in BoardId::ALL {
            for pos in Position::ALL.into_iter().filter(|p| p.row() == row) {
                line.push_str(&cell(board, pos));
            }
            line.push_str("      ");
        }
        writeln!(f, "{}", line.trim_end())?;
    }
    Ok(())
}

fn write_status(
    f: &mut fmt::Formatter<'_>,
    status: MatchStatus,
    x_score: u8,
    o_score: u8,
    to_move: Option<Piece>,
    winner: Option<&PlayerId>,
) -> fmt::Result {
    write!(f, "{status}  X {x_score} - {o_score} O")?;
    match (status, to_move, winner) {
        (MatchStatus::InProgress, Some(piece), _) => writeln!(f, "  {piece} to move"),
        (MatchStatus::Over, _, Some(player)) => writeln!(f, "  winner: {player}"),
        (MatchStatus::Over, _, None) => writeln!(f, "  tie"),
        _ => writeln!(f),
    }
}
