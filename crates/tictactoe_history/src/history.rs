//! Game history with time travel.
//!
//! [`GameHistory`] keeps every board snapshot the game has passed through
//! and a cursor selecting the one being viewed. Moves are always played
//! from the cursor: playing after jumping back discards the old future
//! and starts a new branch.

use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::record::{MoveEntry, MoveRecord};
use super::rules::{evaluate, WinResult};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The board at the cursor already has a completed line.
    #[display("Game is already over")]
    GameOver,
    /// The target square is taken.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

/// Result of asking the history to play a move.
///
/// Rejection is not an error: the state is left untouched and the
/// caller may simply ignore the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded at `step`.
    Applied {
        /// Index of the new record, now also the cursor.
        step: usize,
        /// Player whose mark was placed.
        player: Player,
    },
    /// The move was ignored.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Misuse of the history's navigation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Jump target past the end of the history.
    #[display("Step {} is out of range (history has {} records)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of records at the time of the request.
        len: usize,
    },
    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),
}

impl std::error::Error for HistoryError {}

/// Ordered board snapshots plus the cursor into them.
///
/// Serializable for inspection only; a history is always built by play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) records: Vec<MoveRecord>,
    pub(crate) cursor: usize,
    pub(crate) ascending: bool,
}

impl GameHistory {
    /// Creates a history holding only the starting record, listed ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a history with the given initial move-list order.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        Self {
            records: vec![MoveRecord::start()],
            cursor: 0,
            ascending,
        }
    }

    /// Plays the current player's mark at `pos`, branching from the cursor.
    ///
    /// Records after the cursor are dropped only when the move is accepted.
    /// A move onto an occupied square, or from a board that already has a
    /// winner, leaves the history exactly as it was.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.records.len()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let board = *self.records[self.cursor].board();

        if evaluate(&board).is_some() {
            debug!(?pos, "Move rejected: game already won");
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        if !board.is_empty(pos) {
            debug!(?pos, "Move rejected: square occupied");
            return MoveOutcome::Rejected(RejectReason::Occupied(pos));
        }

        let player = self.next_player();
        let discarded = self.records.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future records for new branch");
        }
        self.records.truncate(self.cursor + 1);
        self.records.push(MoveRecord::after(board, pos, player));
        self.cursor = self.records.len() - 1;

        info!(step = self.cursor, ?player, ?pos, "Move applied");

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }

        MoveOutcome::Applied {
            step: self.cursor,
            player,
        }
    }

    /// Panics if any history invariant is broken.
    fn assert_invariants(&self) {
        if let Err(violations) = TicTacToeInvariants::check_all(self) {
            warn!(?violations, "History invariants violated");
            panic!("history invariants violated: {violations:?}");
        }
    }

    /// Plays at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::CellOutOfRange`] for indices above 8.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, cell: usize) -> Result<MoveOutcome, HistoryError> {
        let pos = Position::from_index(cell).ok_or(HistoryError::CellOutOfRange(cell))?;
        Ok(self.apply_move(pos))
    }

    /// Moves the cursor to `step` without touching the records.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` is not a recorded
    /// step; the cursor does not move.
    #[instrument(skip(self), fields(len = self.records.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.records.len() {
            debug!("Jump rejected: step out of range");
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.records.len(),
            });
        }
        self.cursor = step;
        debug!(cursor = self.cursor, "Cursor moved");
        Ok(())
    }

    /// Moves the cursor to `step`, or to the last record if `step` is past it.
    ///
    /// Returns the step actually selected.
    #[instrument(skip(self), fields(len = self.records.len()))]
    pub fn jump_to_clamped(&mut self, step: usize) -> usize {
        self.cursor = step.min(self.records.len() - 1);
        debug!(cursor = self.cursor, "Cursor moved");
        self.cursor
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Display order toggled");
    }

    /// Board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.records[self.cursor].board()
    }

    /// Winning line on the board at the cursor, if any.
    pub fn current_result(&self) -> Option<WinResult> {
        evaluate(self.current_board())
    }

    /// Player to move from the cursor: X on even steps, O on odd.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Lazily lists every record as `(step, board, position)`.
    ///
    /// Ordered by step, ascending or descending per the display flag.
    /// Each call starts a fresh iterator.
    pub fn move_list(&self) -> impl Iterator<Item = MoveEntry<'_>> + '_ {
        let len = self.records.len();
        let ascending = self.ascending;
        (0..len)
            .map(move |i| if ascending { i } else { len - 1 - i })
            .map(move |step| {
                let record = &self.records[step];
                MoveEntry::new(step, record.board(), record.position())
            })
    }

    /// Number of records, including the starting one.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a history holds at least the starting record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the record being viewed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the move list is listed oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(history: &mut GameHistory, cells: &[usize]) {
        for &cell in cells {
            let outcome = history.apply_index(cell).expect("cell in range");
            assert!(outcome.is_applied(), "move at {cell} should apply");
        }
    }

    #[test]
    fn test_new_history_has_start_record() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.records()[0].position(), None);
        assert_eq!(history.next_player(), Player::X);
    }

    #[test]
    fn test_rejected_move_after_jump_keeps_future() {
        let mut history = GameHistory::new();
        play(&mut history, &[0, 4, 8]);
        history.jump_to(1).unwrap();

        let outcome = history.apply_move(Position::TopLeft);
        assert_eq!(
            outcome,
            MoveOutcome::Rejected(RejectReason::Occupied(Position::TopLeft))
        );
        assert_eq!(history.len(), 4);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_jump_does_not_truncate() {
        let mut history = GameHistory::new();
        play(&mut history, &[0, 1, 2]);
        history.jump_to(0).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_board(), &Board::new());
        history.jump_to(3).unwrap();
        assert_eq!(
            history.current_board().get(Position::TopRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_clamped_jump() {
        let mut history = GameHistory::new();
        play(&mut history, &[4, 0]);
        assert_eq!(history.jump_to_clamped(10), 2);
        assert_eq!(history.jump_to_clamped(1), 1);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_out_of_range_cell_is_an_error() {
        let mut history = GameHistory::new();
        assert_eq!(
            history.apply_index(9),
            Err(HistoryError::CellOutOfRange(9))
        );
        assert_eq!(history.len(), 1);
    }
}
