//! First-class command types for the history engine.
//!
//! Commands are the user's intent (click a square, click a history entry,
//! flip the list order). They can be parsed, logged and validated
//! independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user action dispatched to [`GameEngine`](super::GameEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place the next mark at a position.
    Play(Position),
    /// Move the current-move pointer to a recorded history entry.
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    ToggleOrder,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Play(pos) => write!(f, "play:{}", pos.to_index()),
            Command::JumpTo(index) => write!(f, "jump:{}", index),
            Command::ToggleOrder => write!(f, "toggle"),
        }
    }
}

/// Parses `play:<cell>`, `jump:<move>`, `toggle`, or a bare cell number.
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb.trim(), Some(arg.trim())),
            None => (s, None),
        };

        match (verb.to_lowercase().as_str(), arg) {
            ("toggle", None) => Ok(Command::ToggleOrder),
            ("play", Some(cell)) => parse_cell(cell),
            ("jump", Some(index)) => index
                .parse::<usize>()
                .map(Command::JumpTo)
                .map_err(|_| CommandError::Parse(format!("Invalid move number: {}", index))),
            (cell, None) if cell.chars().all(|c| c.is_ascii_digit()) && !cell.is_empty() => {
                parse_cell(cell)
            }
            _ => Err(CommandError::Parse(format!("Unrecognized command: {}", s))),
        }
    }
}

fn parse_cell(cell: &str) -> Result<Command, CommandError> {
    Position::from_label_or_number(cell)
        .map(Command::Play)
        .ok_or_else(|| CommandError::Parse(format!("Invalid cell: {}", cell)))
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Why a history lookup or jump was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The move index does not name a recorded board.
    #[display("Move {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested move index.
        index: usize,
        /// Current history length.
        len: usize,
    },

    /// The board at this move does not differ from its predecessor in exactly one square.
    #[display("Move {} does not change exactly one square", _0)]
    Unchanged(usize),
}

impl std::error::Error for HistoryError {}

/// Any rejection of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum CommandError {
    /// The move was illegal.
    #[display("{}", _0)]
    Move(MoveError),

    /// The jump target was invalid.
    #[display("{}", _0)]
    History(HistoryError),

    /// The command text could not be parsed.
    #[display("Parse error: {}", _0)]
    #[from(ignore)]
    Parse(String),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Move(e) => Some(e),
            CommandError::History(e) => Some(e),
            CommandError::Parse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("play:4".parse::<Command>(), Ok(Command::Play(Position::Center)));
        assert_eq!("8".parse::<Command>(), Ok(Command::Play(Position::BottomRight)));
        assert_eq!("jump:2".parse::<Command>(), Ok(Command::JumpTo(2)));
        assert_eq!(" Toggle ".parse::<Command>(), Ok(Command::ToggleOrder));
        assert_eq!(
            "play:top-left".parse::<Command>(),
            Ok(Command::Play(Position::TopLeft))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("play:9".parse::<Command>(), Err(CommandError::Parse(_))));
        assert!(matches!("jump:-1".parse::<Command>(), Err(CommandError::Parse(_))));
        assert!(matches!("undo".parse::<Command>(), Err(CommandError::Parse(_))));
        assert!(matches!("".parse::<Command>(), Err(CommandError::Parse(_))));
    }

    #[test]
    fn test_display_parses_back() {
        for cmd in [Command::Play(Position::TopRight), Command::JumpTo(3), Command::ToggleOrder] {
            assert_eq!(cmd.to_string().parse::<Command>(), Ok(cmd));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = CommandError::from(MoveError::SquareOccupied(Position::Center));
        assert_eq!(err.to_string(), "Square Center is already occupied");
        let err = CommandError::from(HistoryError::OutOfRange { index: 5, len: 2 });
        assert!(err.to_string().contains("out of range"));
    }
}
