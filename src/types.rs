//! Core domain types for the tic-tac-toe engine.

use crate::action::Move;
use crate::position::Position;
use crate::rules::WinningLine;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the round.
///
/// The status only ever moves forward: `InProgress` to `Won` or `Draw`.
/// Getting back to `InProgress` requires an explicit round restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended in a win.
    Won {
        /// The player who completed a line.
        winner: Player,
        /// The completed line, for the host to highlight.
        line: WinningLine,
    },
    /// Round ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Returns true if the round can still accept moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if the round was won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if the round was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Complete state of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Round status.
    status: GameStatus,
    /// Move history for this round.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh round: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history for this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark (unchecked - use Engine::make_move
    /// for validation).
    pub(crate) fn place(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.current_player));
        self.history.push(Move::new(self.current_player, pos));
    }

    /// Switches the turn to the other player.
    pub(crate) fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the round status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
