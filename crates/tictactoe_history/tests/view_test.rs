//! Tests for the text view.

use tictactoe_history::view::{order_label, render, status};
use tictactoe_history::{GameHistory, Position};

#[test]
fn test_status_reports_next_player_then_winner() {
    let mut history = GameHistory::new();
    assert_eq!(status(&history), "Next player: X");

    for pos in [
        Position::TopRight,
        Position::TopLeft,
        Position::MiddleRight,
        Position::Center,
        Position::BottomRight,
    ] {
        history.apply_move(pos);
    }
    assert_eq!(status(&history), "Winner: X");

    history.jump_to(3).unwrap();
    assert_eq!(status(&history), "Next player: O");
}

#[test]
fn test_order_label() {
    assert_eq!(order_label(true), "Ascending");
    assert_eq!(order_label(false), "Descending");
}

#[test]
fn test_render_lists_moves_in_display_order() {
    let mut history = GameHistory::new();
    history.apply_move(Position::Center);
    history.toggle_order();

    let screen = render(&history);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Order: Descending"));
    let first = screen.find("Go to move #1").unwrap();
    let start = screen.find("Go to game start").unwrap();
    assert!(first < start);
}
