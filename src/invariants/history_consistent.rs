//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::types::{GameState, Square};

/// Invariant: history length equals the number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(state: &GameState) -> bool {
        let occupied = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        state.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_fresh_round_holds() {
        let engine = Engine::new();
        assert!(HistoryConsistent::holds(engine.state()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let engine = Engine::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .expect("legal sequence");
        assert!(HistoryConsistent::holds(engine.state()));
        assert_eq!(engine.state().history().len(), 4);
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut engine = Engine::new();
        engine.make_move(Position::Center).expect("legal move");

        // Fill a square without a matching history entry
        let mut state = engine.state().clone();
        state
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));

        assert!(!HistoryConsistent::holds(&state));
    }
}
