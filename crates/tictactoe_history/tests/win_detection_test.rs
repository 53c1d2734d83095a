//! Tests for winning-line evaluation.

use tictactoe_history::{evaluate, Board, Player, Position, Square, LINES};

fn board_with(marks: &[(Position, Player)]) -> Board {
    let mut board = Board::new();
    for &(pos, player) in marks {
        board.set(pos, Square::Occupied(player));
    }
    board
}

#[test]
fn test_empty_board_has_no_result() {
    assert_eq!(evaluate(&Board::new()), None);
}

#[test]
fn test_every_line_is_detected_for_both_players() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|&pos| (pos, player)).collect();
            let win = evaluate(&board_with(&marks)).expect("line should win");
            assert_eq!(win.winner(), player);
            assert_eq!(win.cells(), line);
        }
    }
}

#[test]
fn test_result_ignores_marks_outside_the_line() {
    for line in LINES {
        let marks: Vec<_> = line.iter().map(|&pos| (pos, Player::X)).collect();
        let base = evaluate(&board_with(&marks));

        for other in Position::ALL.iter().filter(|p| !line.contains(p)) {
            let mut extra = marks.clone();
            extra.push((*other, Player::O));
            assert_eq!(evaluate(&board_with(&extra)), base, "extra O at {other}");
        }
    }
}

#[test]
fn test_full_board_without_line_has_no_result() {
    // X O X / X O O / O X X
    let board = board_with(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::O),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::X),
        (Position::Center, Player::O),
        (Position::MiddleRight, Player::O),
        (Position::BottomLeft, Player::O),
        (Position::BottomCenter, Player::X),
        (Position::BottomRight, Player::X),
    ]);
    assert!(Position::ALL.iter().all(|pos| !board.is_empty(*pos)));
    assert_eq!(evaluate(&board), None);
}

#[test]
fn test_win_result_contains_only_its_cells() {
    let win = evaluate(&board_with(&[
        (Position::TopRight, Player::O),
        (Position::Center, Player::O),
        (Position::BottomLeft, Player::O),
    ]))
    .expect("anti-diagonal should win");
    assert!(win.contains(Position::Center));
    assert!(!win.contains(Position::TopLeft));
}
