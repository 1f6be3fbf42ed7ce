//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, GameState, Square};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied it never changes.
/// Verified by replaying the move history and comparing boards.
pub struct MonotonicBoard;

impl Invariant<GameState> for MonotonicBoard {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            // Square must be empty before placing
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
