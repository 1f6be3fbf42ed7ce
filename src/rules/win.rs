//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// A line of three positions that constitutes a win.
pub type WinningLine = [Position; 3];

/// The 8 winning lines in fixed priority order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals.
///
/// In a legal game at most one line can be complete, so the order is
/// inert mathematically, but scanning in a fixed order keeps the
/// reported line deterministic.
pub const WIN_LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Scans the winning lines and returns the first completed one.
///
/// Returns `Some((player, line))` if the player holds all three squares
/// of a line, `None` otherwise.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        let (winner, line) = winning_line(&board).expect("top row is complete");
        assert_eq!(winner, Player::X);
        assert_eq!(
            line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        let (winner, line) = winning_line(&board).expect("diagonal is complete");
        assert_eq!(winner, Player::O);
        assert_eq!(
            line,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_line_priority_is_scan_order() {
        // Put both marks of one player on two lines sharing a corner;
        // the row comes before the column in WIN_LINES.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        let (_, line) = winning_line(&board).expect("board has a complete line");
        assert_eq!(
            line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
