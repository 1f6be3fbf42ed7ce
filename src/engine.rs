//! The game engine: a synchronous state machine over one round of
//! tic-tac-toe plus the cumulative score tally.
//!
//! All mutation of game state passes through the engine's operations.
//! Rejected moves are guaranteed no-ops, so a host can treat any `Err`
//! as "nothing happened" and re-render from the unchanged state.

use crate::action::MoveError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::score::ScoreTally;
use crate::types::{GameState, GameStatus, Player};
use tracing::{debug, info, instrument};

/// Headless tic-tac-toe engine.
///
/// Owns the round state and the score tally exclusively; the host drives
/// it through [`make_move`](Engine::make_move), [`restart_round`](Engine::restart_round)
/// and [`reset_scores`](Engine::reset_scores), and reads state back after
/// each call to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    state: GameState,
    scores: ScoreTally,
}

impl Engine {
    /// Creates an engine with a fresh round and a zeroed tally.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            scores: ScoreTally::new(),
        }
    }

    /// Creates an engine with a fresh round and a restored tally.
    ///
    /// Hosts that persist scores across sessions pass the restored
    /// snapshot here at startup.
    #[instrument]
    pub fn with_scores(scores: ScoreTally) -> Self {
        Self {
            state: GameState::new(),
            scores,
        }
    }

    /// Returns the current round state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the score tally.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Returns the positions still open for a move.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.state.board())
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the engine evaluates termination: the win check runs
    /// first, in fixed line order, then the draw check. A winning move
    /// records the win in the tally; a non-terminal move switches the
    /// turn. Returns the resulting state; the winning line, if any, is
    /// carried in [`GameStatus::Won`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the round is over and
    /// [`MoveError::SquareOccupied`] if the square is taken. Either way
    /// the engine state is unchanged.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: Position) -> Result<&GameState, MoveError> {
        if !self.state.status().is_in_progress() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.state.place(pos);

        if let Some((winner, line)) = rules::winning_line(self.state.board()) {
            info!(%winner, "Round won");
            self.state.set_status(GameStatus::Won { winner, line });
            self.scores.record_win(winner);
        } else if rules::is_full(self.state.board()) {
            info!("Round drawn");
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.switch_turn();
        }

        debug_assert!(
            EngineInvariants::check_all(&self.state).is_ok(),
            "invariant violated after accepted move"
        );

        Ok(&self.state)
    }

    /// Places a mark by raw board index (0-8), for hosts speaking
    /// indices rather than [`Position`] values.
    ///
    /// # Errors
    ///
    /// As [`make_move`](Engine::make_move), plus [`MoveError::OutOfBounds`]
    /// for indices outside 0-8.
    #[instrument(skip(self))]
    pub fn make_move_at(&mut self, index: usize) -> Result<&GameState, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.make_move(pos)
    }

    /// Starts a fresh round: empty board, X to move, status in progress.
    ///
    /// The score tally is untouched. Idempotent.
    #[instrument(skip(self))]
    pub fn restart_round(&mut self) {
        debug!("Restarting round");
        self.state = GameState::new();
    }

    /// Zeroes the score tally and starts a fresh round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        debug!("Resetting scores");
        self.scores.reset();
        self.restart_round();
    }

    /// Reconstructs an engine by applying a move sequence to a fresh
    /// round. Stops early if the sequence reaches a terminal state.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered, discarding the partial
    /// engine.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &pos in moves {
            engine.make_move(pos)?;
            if !engine.state.status().is_in_progress() {
                break;
            }
        }
        Ok(engine)
    }

    /// Convenience accessor for the current player.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Convenience accessor for the round status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
