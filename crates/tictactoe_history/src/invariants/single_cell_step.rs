//! Single-cell step invariant: each record adds exactly one mark.

use super::super::{Board, GameHistory, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// Record 0 is the empty board with no move. For every later record
/// the only changed square is the one at its position, and it went
/// from empty to occupied.
pub struct SingleCellStepInvariant;

impl Invariant<GameHistory> for SingleCellStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        let records = history.records();

        let Some(first) = records.first() else {
            return false;
        };
        if *first.board() != Board::new() || first.position().is_some() {
            return false;
        }

        records.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(pos) = next.position() else {
                return false;
            };
            prev.board().diff(next.board()) == vec![pos]
                && prev.board().get(pos) == Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each record differs from the previous one in exactly its own square"
    }
}
