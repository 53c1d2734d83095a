//! Alternating mark invariant: players alternate X, O, X, O, ...

use super::super::{GameHistory, Player, Square};
use super::Invariant;

/// Invariant: the mark placed at record `k` belongs to the player
/// whose turn it was at step `k - 1`.
///
/// X fills odd records, O fills even ones.
pub struct AlternatingMarkInvariant;

impl Invariant<GameHistory> for AlternatingMarkInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .records()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, record)| match record.position() {
                Some(pos) => {
                    record.board().get(pos) == Square::Occupied(Player::for_step(step - 1))
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
