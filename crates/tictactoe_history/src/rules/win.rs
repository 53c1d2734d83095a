//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, scanned in this order.
///
/// When two lines are complete at once the first one listed wins the tie.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who made it and which cells form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new)]
pub struct WinResult {
    /// Player owning all three cells.
    #[getter(copy)]
    winner: Player,
    /// The winning triple, in line-table order.
    #[getter(copy)]
    cells: [Position; 3],
}

impl WinResult {
    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Evaluates the board for a completed line.
///
/// Returns the first line in [`LINES`] held entirely by one player, or
/// `None` if there is none. A full board without a line is also `None`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinResult::new(player, [a, b, c]))
            }
            _ => None,
        }
    })
}
