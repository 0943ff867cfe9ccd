//! Terminal invariant: no board is recorded after a won board.

use super::super::GameEngine;
use super::super::rules::calculate_winner;
use super::Invariant;

/// Invariant: only the last board in history may have a winner.
pub struct FinishedIsFinalInvariant;

impl Invariant<GameEngine> for FinishedIsFinalInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match engine.history().split_last() {
            Some((_, earlier)) => earlier.iter().all(|b| calculate_winner(b).is_none()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No move is recorded after a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_won_game_holds() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 1, 3, 2] {
            engine.apply_move(cell).expect("empty cell");
        }
        assert!(FinishedIsFinalInvariant::holds(&engine));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 1, 3, 2] {
            engine.apply_move(cell).expect("empty cell");
        }
        let last = *engine.current_board();
        engine.history.push(last.with_mark(Position::BottomRight, Player::O));
        assert!(!FinishedIsFinalInvariant::holds(&engine));
    }
}
