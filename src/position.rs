//! Typed board positions.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (indices 0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Filters positions by board state - returns only empty squares.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            let pos = Position::from_index(index).expect("valid index");
            assert_eq!(pos.to_index(), index);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_valid_moves_on_empty_board() {
        let board = Board::new();
        assert_eq!(Position::valid_moves(&board).len(), 9);
    }
}
