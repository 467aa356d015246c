//! oxo - command-line front end for the oxo minimax engine.
//!
//! The binary only parses input, calls [`oxo_engine`] and prints results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Command};
pub use commands::{batch, best, parse_board, playout, show};
pub use config::{BatchConfig, ConfigError, PositionEntry};
