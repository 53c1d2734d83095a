//! Move records: board snapshots paired with the move that produced them.

use super::{Board, Coords, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An immutable snapshot in the game history.
///
/// The first record of every history is the empty board with no move.
/// Every later record holds the board right after a move and the
/// position that move filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MoveRecord {
    /// Board after the move.
    board: Board,
    /// Cell the move filled; `None` for the starting record.
    #[getter(copy)]
    position: Option<Position>,
}

impl MoveRecord {
    /// The starting record: an empty board and no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Derives the record produced by `player` marking `position` on `board`.
    pub(crate) fn after(mut board: Board, position: Position, player: Player) -> Self {
        board.set(position, Square::Occupied(player));
        Self {
            board,
            position: Some(position),
        }
    }

    /// Row and column of the move, if this record has one.
    pub fn coords(&self) -> Option<Coords> {
        self.position.map(Position::coords)
    }
}

/// One entry of the navigable move list.
///
/// Borrowed from the history; recomputed each time the list is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct MoveEntry<'a> {
    /// Index of the record in the history.
    #[getter(copy)]
    step: usize,
    /// Board at that step.
    #[getter(copy)]
    board: &'a Board,
    /// Cell filled at that step.
    #[getter(copy)]
    position: Option<Position>,
}

impl MoveEntry<'_> {
    /// Navigation label for this entry.
    pub fn label(&self) -> String {
        match self.position {
            Some(pos) => format!("Go to move #{} {}", self.step, pos.coords()),
            None => "Go to game start".to_string(),
        }
    }
}

impl std::fmt::Display for MoveEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
