//! Cursor bounds invariant.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: the history is non-empty and the cursor points into it.
pub struct CursorBoundsInvariant;

impl Invariant<GameHistory> for CursorBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        !history.records().is_empty() && history.cursor() < history.records().len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing record"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_cursor_follows_moves_and_jumps() {
        let mut history = GameHistory::new();
        assert!(CursorBoundsInvariant::holds(&history));
        history.apply_move(Position::Center);
        history.apply_move(Position::TopLeft);
        assert!(CursorBoundsInvariant::holds(&history));
        history.jump_to(0).unwrap();
        assert!(CursorBoundsInvariant::holds(&history));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut history = GameHistory::new();
        history.cursor = 1;
        assert!(!CursorBoundsInvariant::holds(&history));
    }
}
