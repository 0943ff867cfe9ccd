//! What a view re-queries after each command.

use serde::Serialize;
use tictactoe_history::{Board, DisplayOrder, GameEngine, GameStatus, HistoryError, MoveEntry};
use tracing::instrument;

/// Everything needed to render the game once.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Board currently shown.
    pub board: Board,
    /// Status of that board.
    pub status: GameStatus,
    /// Index of the board currently shown.
    pub current_move: usize,
    /// Order of `moves`.
    pub display_order: DisplayOrder,
    /// The move list, in display order.
    pub moves: Vec<MoveEntry>,
}

impl Snapshot {
    /// Queries the engine for a fresh snapshot.
    #[instrument(skip(engine))]
    pub fn of(engine: &GameEngine) -> Result<Self, HistoryError> {
        Ok(Self {
            board: *engine.current_board(),
            status: engine.current_status(),
            current_move: engine.current_move(),
            display_order: engine.display_order(),
            moves: engine.move_entries()?,
        })
    }

    /// Renders the snapshot as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.board.display());
        out.push_str("\n\n");
        out.push_str(&self.status.to_string());
        if let Some(line) = self.status.winning_line() {
            let cells: Vec<String> = line.iter().map(|p| p.to_index().to_string()).collect();
            out.push_str(&format!(" (line {})", cells.join("-")));
        }
        out.push_str(&format!("\n\nMoves ({}):\n", self.display_order));
        for entry in &self.moves {
            out.push_str(&format!("{:>2}. {}\n", entry.index, entry));
        }
        out
    }
}
