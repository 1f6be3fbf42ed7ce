//! Cumulative score tracking across rounds.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Win counts per player, surviving round restarts.
///
/// Serializes to the host's persistence format, a flat
/// `{"X": <int>, "O": <int>}` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Wins for player X.
    #[serde(rename = "X", default)]
    x: u32,
    /// Wins for player O.
    #[serde(rename = "O", default)]
    o: u32,
}

impl ScoreTally {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for a player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Returns the player strictly ahead on wins, or `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Greater => Some(Player::X),
            std::cmp::Ordering::Less => Some(Player::O),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Increments the winner's count by one.
    pub(crate) fn record_win(&mut self, winner: Player) {
        match winner {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
        debug!(%winner, x = self.x, o = self.o, "Recorded win");
    }

    /// Zeroes both counts.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Emits the snapshot for the host to persist.
    pub fn to_json(&self) -> String {
        serde_json::json!({ "X": self.x, "O": self.o }).to_string()
    }

    /// Restores a tally from a persisted snapshot.
    ///
    /// Malformed data (bad JSON, missing keys, non-numeric or negative
    /// values) is treated as absent: the result defaults to zero for
    /// both players rather than propagating a parse failure.
    pub fn from_json(snapshot: &str) -> Self {
        match serde_json::from_str(snapshot) {
            Ok(tally) => tally,
            Err(error) => {
                warn!(%error, "Malformed score snapshot, defaulting to zero");
                Self::default()
            }
        }
    }
}
