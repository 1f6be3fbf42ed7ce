//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and tests can exercise them independently.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinningLine, winning_line};
