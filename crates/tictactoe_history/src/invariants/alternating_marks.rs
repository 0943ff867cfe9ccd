//! Alternation invariant: X and O take turns, X first.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: on board `k`, X leads O by one mark when `k` is odd and is
/// level with O when `k` is even.
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().iter().enumerate().all(|(k, board)| {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            x == o + k % 2
        })
    }

    fn description() -> &'static str {
        "X and O alternate, X moving first"
    }
}
