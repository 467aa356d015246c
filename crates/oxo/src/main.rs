//! oxo - perfect-play tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use oxo::{Cli, Command};
use oxo_engine::Board;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "Parsed command line");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Show { board } => oxo::show(&oxo::parse_board(&board)?, &mut out),
        Command::Best { board } => oxo::best(&oxo::parse_board(&board)?, &mut out),
        Command::Playout { from } => {
            let board = match from {
                Some(text) => oxo::parse_board(&text)?,
                None => Board::new(),
            };
            oxo::playout(&board, &mut out)
        }
        Command::Batch { file } => oxo::batch(&file, &mut out),
    }
}

/// Logs to stderr, filtered by RUST_LOG when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
