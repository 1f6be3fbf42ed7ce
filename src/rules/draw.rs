//! Draw detection logic.

use super::win::winning_line;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no completed line.
///
/// The win check takes precedence: a board that is full on the winning
/// move is a win, not a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}
