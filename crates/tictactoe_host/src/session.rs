//! Line-oriented play session.
//!
//! The session owns one [`GameHistory`] and translates typed commands into
//! calls on it, re-rendering the screen after each one.

use crate::config::{HostConfig, JumpPolicy};
use anyhow::Result;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tictactoe_history::{view, GameHistory, MoveOutcome};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  0-8       place the next mark on that cell
  jump <n>  view the board after move n (0 = game start)
  toggle    flip the move list order
  dump      print the history as JSON
  help      show this message
  quit      leave the game";

/// A parsed user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at a cell index.
    Place(usize),
    /// Move the cursor to a step.
    Jump(usize),
    /// Flip the move list order.
    Toggle,
    /// Print the history as JSON.
    Dump,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
}

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command: {:?} (type 'help')", input)]
pub struct CommandError {
    /// The offending input, trimmed.
    pub input: String,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    #[instrument]
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let error = || CommandError {
            input: line.to_string(),
        };

        let command = match (head.to_lowercase().as_str(), words.next()) {
            ("jump", Some(step)) => Command::Jump(step.parse().map_err(|_| error())?),
            ("toggle", None) => Command::Toggle,
            ("dump", None) => Command::Dump,
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            (cell, None) => Command::Place(cell.parse().map_err(|_| error())?),
            _ => return Err(error()),
        };

        if words.next().is_some() {
            return Err(error());
        }
        Ok(Some(command))
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop.
    Quit,
}

/// An interactive game: one history plus the host settings.
#[derive(Debug, Clone)]
pub struct Session {
    history: GameHistory,
    config: HostConfig,
}

impl Session {
    /// Starts a fresh game.
    #[instrument]
    pub fn new(config: HostConfig) -> Self {
        Self {
            history: GameHistory::with_order(config.ascending()),
            config,
        }
    }

    /// The game being played.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Executes one command, writing any message for the player to `out`.
    #[instrument(skip(self, out))]
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Place(cell) => match self.history.apply_index(cell) {
                Ok(MoveOutcome::Applied { step, player }) => {
                    debug!(step, %player, "Placed mark");
                }
                Ok(MoveOutcome::Rejected(reason)) => writeln!(out, "{reason}")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Jump(step) => match self.config.out_of_range() {
                JumpPolicy::Reject => {
                    if let Err(e) = self.history.jump_to(step) {
                        writeln!(out, "{e}")?;
                    }
                }
                JumpPolicy::Clamp => {
                    let landed = self.history.jump_to_clamped(step);
                    if landed != step {
                        writeln!(out, "Jumped to last move #{landed}")?;
                    }
                }
            },
            Command::Toggle => self.history.toggle_order(),
            Command::Dump => {
                let json = serde_json::to_string_pretty(&self.history)?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands from `input` until EOF or `quit`, rendering after each.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        info!("Starting play session");
        writeln!(out, "{}\n", view::render(&self.history))?;

        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!(error = %e, "Ignoring input");
                    writeln!(out, "{e}")?;
                    continue;
                }
            };

            if self.execute(command, &mut *out)? == Flow::Quit {
                break;
            }
            if !matches!(command, Command::Help | Command::Dump) {
                writeln!(out, "{}\n", view::render(&self.history))?;
            }
        }

        info!(moves = self.history.len() - 1, "Play session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("4"), Ok(Some(Command::Place(4))));
        assert_eq!(Command::parse("  jump 2 "), Ok(Some(Command::Jump(2))));
        assert_eq!(Command::parse("TOGGLE"), Ok(Some(Command::Toggle)));
        assert_eq!(Command::parse("q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Command::parse("jump").is_err());
        assert!(Command::parse("jump x").is_err());
        assert!(Command::parse("toggle now").is_err());
        assert!(Command::parse("4 5").is_err());
        assert!(Command::parse("center").is_err());
    }
}
