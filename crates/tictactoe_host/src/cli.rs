//! Command-line interface for the tic-tac-toe host.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe and travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to host config file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// List moves newest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply the given cells in order and print the final screen
    Replay {
        /// Cell indices (0-8), row-major
        cells: Vec<usize>,
    },
}
