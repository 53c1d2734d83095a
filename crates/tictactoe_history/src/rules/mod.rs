//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from history
//! storage so they can be tested and reused on any snapshot.

pub mod win;

pub use win::{evaluate, WinResult, LINES};
