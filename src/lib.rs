//! Headless tic-tac-toe game engine.
//!
//! This crate is the game-logic core of a tic-tac-toe application:
//! board state, win/draw detection, turn switching, and cumulative
//! score tracking. It has no UI, no timers, and no I/O - a host layer
//! (DOM, TUI, server, anything) drives it through three operations and
//! reads state back after each call to render.
//!
//! # Architecture
//!
//! - **Engine**: the state machine owning one round plus the score tally
//! - **Rules**: pure win/draw evaluation over the board
//! - **Invariants**: first-class, independently testable round properties
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, Player, Position};
//!
//! let mut engine = Engine::new();
//! engine.make_move(Position::TopLeft)?;   // X
//! engine.make_move(Position::Center)?;    // O
//! engine.make_move(Position::TopCenter)?; // X
//! engine.make_move(Position::BottomLeft)?;// O
//! let state = engine.make_move(Position::TopRight)?; // X wins the top row
//!
//! assert_eq!(state.status().winner(), Some(Player::X));
//! assert_eq!(engine.scores().wins(Player::X), 1);
//!
//! engine.restart_round(); // board clears, tally survives
//! assert!(engine.status().is_in_progress());
//! assert_eq!(engine.scores().wins(Player::X), 1);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod position;
mod score;
mod types;

// Public rule and invariant modules
pub mod invariants;
pub mod rules;

// Crate-level exports - actions
pub use action::{Move, MoveError};

// Crate-level exports - engine
pub use engine::Engine;

// Crate-level exports - positions and rules
pub use position::Position;
pub use rules::{WIN_LINES, WinningLine};

// Crate-level exports - scores
pub use score::ScoreTally;

// Crate-level exports - state types
pub use types::{Board, GameState, GameStatus, Player, Square};
