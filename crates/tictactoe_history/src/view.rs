//! Plain-text presentation of a game history.
//!
//! These helpers produce what a front end shows: the board with the
//! winning line highlighted, a status line, and the navigable move list.

use super::rules::WinResult;
use super::{Board, GameHistory, Position, Square};
use tracing::instrument;

/// Status line for the board at the cursor.
///
/// A full board without a line still reports the next player.
pub fn status(history: &GameHistory) -> String {
    match history.current_result() {
        Some(win) => format!("Winner: {}", win.winner()),
        None => format!("Next player: {}", history.next_player()),
    }
}

/// Label for the order toggle.
pub fn order_label(ascending: bool) -> &'static str {
    if ascending { "Ascending" } else { "Descending" }
}

/// Renders the grid; cells of the winning line are wrapped in brackets.
pub fn render_board(board: &Board, win: Option<&WinResult>) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let pos = Position::ALL[row * 3 + col];
                    let symbol = match board.get(pos) {
                        Square::Empty => pos.to_index().to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if win.is_some_and(|w| w.contains(pos)) {
                        format!("[{symbol}]")
                    } else {
                        format!(" {symbol} ")
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Renders the move list, marking the step at the cursor with `>`.
pub fn render_moves(history: &GameHistory) -> String {
    history
        .move_list()
        .map(|entry| {
            let marker = if entry.step() == history.cursor() { '>' } else { ' ' };
            format!("{marker} {:>2}. {}", entry.step(), entry.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the whole screen: board, status, order toggle and move list.
#[instrument(skip(history), fields(cursor = history.cursor(), len = history.len()))]
pub fn render(history: &GameHistory) -> String {
    let win = history.current_result();
    format!(
        "{}\n\n{}\nOrder: {}\n{}",
        render_board(history.current_board(), win.as_ref()),
        status(history),
        order_label(history.is_ascending()),
        render_moves(history),
    )
}
