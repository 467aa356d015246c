//! Command-line interface for oxo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// oxo - perfect-play tic-tac-toe by exhaustive minimax
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Perfect-play tic-tac-toe by exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log search details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` for empty,
/// optionally separated by `/`, e.g. `XX./OO./...`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the status of a board
    Show {
        /// Board to inspect
        board: String,
    },

    /// Find the optimal move for the side to play
    Best {
        /// Board to search
        board: String,
    },

    /// Play optimal moves for both sides until the game ends
    Playout {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        from: Option<String>,
    },

    /// Analyse every position listed in a TOML batch file
    Batch {
        /// Path to the batch file
        file: PathBuf,
    },
}
