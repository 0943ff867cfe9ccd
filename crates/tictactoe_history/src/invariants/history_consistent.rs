//! History consistency invariant: board `k` holds exactly `k` marks.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `history[k]` has exactly `k` occupied squares.
///
/// At `k = 0` this pins the start of history to the empty board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        !engine.history().is_empty()
            && engine
                .history()
                .iter()
                .enumerate()
                .all(|(k, board)| board.occupied() == k)
    }

    fn description() -> &'static str {
        "Board k in history holds exactly k marks"
    }
}
