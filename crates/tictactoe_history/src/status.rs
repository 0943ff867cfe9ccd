//! Derived, read-only views of the engine state.

use super::rules::{WinResult, calculate_winner, is_full};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    /// A line is complete.
    Won {
        /// The mark on the completed line.
        winner: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// The board is full and no line is complete.
    Draw,
    /// The game continues.
    InProgress {
        /// The player to place the next mark.
        next_player: Player,
    },
}

impl GameStatus {
    /// Derives the status of `board`, given who moves next if the game is still open.
    #[instrument(level = "trace")]
    pub fn of(board: &Board, next_player: Player) -> Self {
        if let Some(win) = calculate_winner(board) {
            GameStatus::from(win)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next_player }
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the completed line, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl From<WinResult> for GameStatus {
    fn from(win: WinResult) -> Self {
        GameStatus::Won {
            winner: win.winner(),
            line: win.line(),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next_player } => write!(f, "Next player: {}", next_player),
        }
    }
}

/// What happened at one history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveDescriptor {
    /// History entry 0, the empty board.
    GameStart,
    /// A mark placed by `mover`.
    Move {
        /// Move number (1-based, same as the history index).
        number: usize,
        /// The player who placed the mark.
        mover: Player,
        /// Where the mark was placed.
        position: Position,
    },
}

impl MoveDescriptor {
    /// Zero-based row of the placed mark.
    pub fn row(&self) -> Option<usize> {
        self.position().map(Position::row)
    }

    /// Zero-based column of the placed mark.
    pub fn col(&self) -> Option<usize> {
        self.position().map(Position::col)
    }

    /// The placed mark's position.
    pub fn position(&self) -> Option<Position> {
        match self {
            MoveDescriptor::GameStart => None,
            MoveDescriptor::Move { position, .. } => Some(*position),
        }
    }

    /// The player who moved.
    pub fn mover(&self) -> Option<Player> {
        match self {
            MoveDescriptor::GameStart => None,
            MoveDescriptor::Move { mover, .. } => Some(*mover),
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescriptor::GameStart => write!(f, "Go to game start"),
            MoveDescriptor::Move {
                number,
                mover,
                position,
            } => write!(
                f,
                "Go to move #{} ({} at row {}, col {})",
                number,
                mover,
                position.row() + 1,
                position.col() + 1
            ),
        }
    }
}

/// One row of the move list as a view renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// What happened at this entry.
    pub descriptor: MoveDescriptor,
    /// Whether this entry is the board currently shown.
    pub is_current: bool,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_current {
            match self.index {
                0 => write!(f, "You are at game start"),
                n => write!(f, "You are at move #{}", n),
            }
        } else {
            write!(f, "{}", self.descriptor)
        }
    }
}
