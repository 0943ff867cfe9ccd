//! Tic-tac-toe with move history.
//!
//! A UI-agnostic game core: a 3x3 board, alternating X/O turns, win and draw
//! detection, and a history of board snapshots that a view can list, jump
//! back through, and branch from.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: [`calculate_winner`] over the eight fixed lines, [`is_draw`]
//! - **Engine**: [`GameEngine`] holds history, the current move and the list order
//! - **Commands**: [`Command`] values drive [`GameEngine::apply`]
//! - **Invariants**: properties checked after every transition in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{Command, GameEngine, GameStatus, Player, Position};
//!
//! let engine = [0, 4, 1, 3, 2]
//!     .into_iter()
//!     .filter_map(Position::from_index)
//!     .fold(GameEngine::new(), |engine, pos| engine.apply(Command::Play(pos)));
//!
//! assert_eq!(engine.current_status().winner(), Some(Player::X));
//!
//! // Jump back and branch: moves after #2 are discarded.
//! let engine = engine
//!     .apply(Command::JumpTo(2))
//!     .apply(Command::Play(Position::BottomRight));
//! assert_eq!(engine.history().len(), 4);
//! assert!(matches!(engine.current_status(), GameStatus::InProgress { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Command, CommandError, HistoryError, MoveError};
pub use config::{ConfigError, EngineConfig};
pub use engine::{DisplayOrder, GameEngine};
pub use position::Position;
pub use rules::{LINES, WinResult, calculate_winner, is_draw, is_full};
pub use status::{GameStatus, MoveDescriptor, MoveEntry};
pub use types::{Board, Player, Square};
