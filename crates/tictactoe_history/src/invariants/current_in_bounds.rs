//! Pointer invariant: the current move names a recorded board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `current_move < history.len()`.
pub struct CurrentInBoundsInvariant;

impl Invariant<GameEngine> for CurrentInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_move() < engine.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes a recorded board"
    }
}
