//! Terminal host for the tic-tac-toe history core.
//!
//! Reads commands, drives a [`GameHistory`](tictactoe_history::GameHistory)
//! and prints the rendered board after each one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, HostConfig, JumpPolicy};

// Crate-level exports - Session
pub use session::{Command, CommandError, Flow, Session};
