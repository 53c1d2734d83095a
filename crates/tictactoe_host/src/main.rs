//! Tic-tac-toe host - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use tictactoe_host::{HostConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = HostConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if cli.descending {
        config = config.with_ascending(false);
    }

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { cells } => run_replay(config, &cells),
    }
}

/// Play interactively on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: HostConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    Session::new(config).run(stdin.lock(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Apply a fixed sequence of cells and print the result
#[instrument(skip(config))]
fn run_replay(config: HostConfig, cells: &[usize]) -> Result<()> {
    let mut session = Session::new(config);
    let mut stdout = std::io::stdout();

    for &cell in cells {
        session.execute(tictactoe_host::Command::Place(cell), &mut stdout)?;
    }

    info!(moves = session.history().len() - 1, "Replay finished");
    writeln!(stdout, "{}", tictactoe_history::view::render(session.history()))?;
    Ok(())
}
