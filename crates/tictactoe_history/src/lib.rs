//! Tic-tac-toe move history with time travel.
//!
//! This crate is the game core a front end drives: it records every board
//! the game passes through, lets the player jump back to any of them, and
//! detects the winning line.
//!
//! # Architecture
//!
//! - **History**: [`GameHistory`] owns the snapshots, the cursor and the
//!   move-list order
//! - **Rules**: [`evaluate`] scans the eight lines of a board
//! - **Invariants**: properties of a history checked after every move
//! - **View**: plain-text rendering of a history
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameHistory, Player, Position};
//!
//! let mut history = GameHistory::new();
//! history.apply_move(Position::Center);
//! assert_eq!(history.next_player(), Player::O);
//!
//! // Travel back and branch: the old future is discarded.
//! history.jump_to(0).unwrap();
//! history.apply_move(Position::TopLeft);
//! assert_eq!(history.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
mod invariants;
mod position;
mod record;
mod rules;
mod types;
pub mod view;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Coords, Player, Square};

// Crate-level exports - History
pub use history::{GameHistory, HistoryError, MoveOutcome, RejectReason};
pub use record::{MoveEntry, MoveRecord};

// Crate-level exports - Rules
pub use rules::{evaluate, WinResult, LINES};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingMarkInvariant, CursorBoundsInvariant, Invariant, InvariantSet, InvariantViolation,
    SingleCellStepInvariant, TicTacToeInvariants,
};
