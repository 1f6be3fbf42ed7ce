//! First-class move actions and their rejection reasons.
//!
//! Moves are domain events, not side effects. They are recorded in the
//! round history and can be serialized for replay.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected.
///
/// A rejected move is always a no-op: the engine state before and after
/// the call are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index does not name a board square.
    #[display("index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The round is already over.
    #[display("round is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
