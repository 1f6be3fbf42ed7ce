//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: players alternate turns.
///
/// Move history must show the X, O, X, O, ... pattern with X first,
/// and for an in-progress round the stored current player must match
/// the history's parity.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.is_empty() {
            return state.current_player() == Player::X;
        }

        // First move must be X
        if history[0].player != Player::X {
            return false;
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // For an in-progress round the current player follows parity.
        // After a terminal move the turn is not switched, so the mover
        // stays current.
        if state.status().is_in_progress() {
            let expected_next = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            return state.current_player() == expected_next;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
