//! Command implementations.
//!
//! Each command writes its report to the given writer so stdout stays free
//! of log output.

use crate::config::BatchConfig;
use anyhow::{Context, Result};
use oxo_engine::{Board, analyze, play_out};
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Parses board text, warning if the board could not arise in legal play.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {:?}", text))?;

    if board.check_invariants().is_err() {
        warn!(%board, "Board is not reachable in legal play; results follow the tie-break rules");
    }
    Ok(board)
}

/// Prints the status of a board.
#[instrument(skip(board, out), fields(board = %board))]
pub fn show(board: &Board, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", board.grid())?;
    writeln!(out)?;
    writeln!(out, "to move:  {}", board.current_player())?;

    let actions = board
        .legal_actions()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "legal:    {}", if actions.is_empty() { "none" } else { actions.as_str() })?;
    writeln!(out, "terminal: {}", board.is_terminal())?;

    match board.winner() {
        Some(mark) => writeln!(out, "winner:   {}", mark)?,
        None => writeln!(out, "winner:   none")?,
    }
    if board.is_terminal() {
        writeln!(out, "score:    {:+}", board.score())?;
    }
    Ok(())
}

/// Prints the optimal move, minimax value and search size for a board.
#[instrument(skip(board, out), fields(board = %board))]
pub fn best(board: &Board, out: &mut impl Write) -> Result<()> {
    let analysis = analyze(board);
    match analysis.best_move() {
        Some(mv) => writeln!(out, "best:  {}", mv)?,
        None => writeln!(out, "best:  none (board is terminal)")?,
    }
    writeln!(out, "value: {:+}", analysis.value())?;
    writeln!(out, "nodes: {}", analysis.nodes())?;
    Ok(())
}

/// Plays the game out with optimal moves for both sides.
#[instrument(skip(board, out), fields(board = %board))]
pub fn playout(board: &Board, out: &mut impl Write) -> Result<()> {
    let playout = play_out(board);

    let mut current = *board;
    writeln!(out, "{}", current.grid())?;
    for mv in playout.moves() {
        let player = current.current_player();
        current = current
            .apply_move(*mv)
            .with_context(|| format!("Replaying {} on {}", mv, current))?;
        writeln!(out)?;
        writeln!(out, "{} plays {}", player, mv)?;
        writeln!(out, "{}", current.grid())?;
    }

    writeln!(out)?;
    writeln!(out, "result: {}", playout.outcome())?;
    Ok(())
}

/// Analyses every position in a batch file.
#[instrument(skip(path, out), fields(path = %path.display()))]
pub fn batch(path: &Path, out: &mut impl Write) -> Result<()> {
    let config = BatchConfig::from_file(path)?;

    for entry in config.positions() {
        let board = parse_board(entry.board())
            .with_context(|| format!("Position {:?}", entry.name()))?;
        let analysis = analyze(&board);
        let best = analysis
            .best_move()
            .map_or_else(|| "none".to_string(), |mv| mv.to_string());
        writeln!(
            out,
            "{:<24} {}  best {:<6}  value {:+}  nodes {}",
            entry.name(),
            board,
            best,
            analysis.value(),
            analysis.nodes()
        )?;
    }

    info!(positions = config.positions().len(), "Batch complete");
    Ok(())
}
