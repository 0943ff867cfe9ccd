//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the mark that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The mark filling the line.
    winner: Player,
    /// The winning line, in `LINES` order.
    line: [Position; 3],
}

impl WinResult {
    /// The mark filling the line.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The winning line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Board indices of the winning line.
    pub fn line_indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in `LINES` whose three squares hold the same mark.
/// The winner is read off the line itself, never from whose turn it is.
#[instrument(level = "trace")]
pub fn calculate_winner(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(winner) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinResult {
                    winner,
                    line: [a, b, c],
                })
            }
            _ => None,
        }
    })
}
