//! The history engine: board snapshots, a current-move pointer and list ordering.
//!
//! Every transition is available two ways:
//! - as a command, `apply(&self, Command) -> GameEngine`, which returns the
//!   next snapshot and silently keeps the old one on rejection;
//! - as an in-place operation (`apply_move`, `jump_to`, `toggle_display_order`)
//!   that reports rejection through `Result` and never mutates on `Err`.

use super::action::{Command, CommandError, HistoryError, MoveError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::calculate_winner;
use super::status::{GameStatus, MoveDescriptor, MoveEntry};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Presentation order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl DisplayOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }
}

/// Authoritative game state for one session.
///
/// `history[0]` is the empty board and `history[k]` is the board after `k`
/// moves. `current_move` always indexes an existing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
    pub(crate) display_order: DisplayOrder,
}

impl GameEngine {
    /// Creates a new game at the start position, listing moves ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_display_order(DisplayOrder::default())
    }

    /// Creates a new game with the given list order.
    #[instrument]
    pub fn with_display_order(display_order: DisplayOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            display_order,
        }
    }

    /// Returns every recorded board, from game start to the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the board currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the list order preference.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// Returns the board currently shown.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns the player who would place the next mark from the current board.
    pub fn next_player(&self) -> Player {
        Player::to_move_after(self.current_move)
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Returns the snapshot that results from `command`.
    ///
    /// A rejected command yields an unchanged copy of `self`.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply(&self, command: Command) -> Self {
        match self.try_apply(command) {
            Ok(next) => next,
            Err(e) => {
                debug!(%command, error = %e, "Command rejected");
                self.clone()
            }
        }
    }

    /// Returns the snapshot that results from `command`, or why it was rejected.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_apply(&self, command: Command) -> Result<Self, CommandError> {
        let mut next = self.clone();
        next.execute(command)?;
        Ok(next)
    }

    /// Applies `command` in place.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason; `self` is untouched in that case.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn execute(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Play(pos) => self.play(pos)?,
            Command::JumpTo(index) => self.jump_to(index)?,
            Command::ToggleOrder => self.toggle_display_order(),
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  In-place operations
    // ─────────────────────────────────────────────────────────────

    /// Places the next mark at `cell_index` (0-8).
    ///
    /// # Errors
    ///
    /// - `MoveError::OutOfBounds` if the index is not on the board
    /// - `MoveError::SquareOccupied` if the current board has a mark there
    /// - `MoveError::GameOver` if the current board already has a winner
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<(), MoveError> {
        self.play(Position::try_from(cell_index)?)
    }

    /// Places the next mark at `pos`, discarding any recorded moves after the
    /// current one.
    ///
    /// # Errors
    ///
    /// See [`GameEngine::apply_move`].
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.next_player()))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = self.current_board();

        if let Some(win) = calculate_winner(board) {
            return Err(MoveError::GameOver(win.winner()));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = board.with_mark(pos, self.next_player());
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(history_len = self.history.len(), "Move recorded");
        self.debug_check_invariants("play");
        Ok(())
    }

    /// Shows the board at `move_index` without altering history.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::OutOfRange` if no such entry exists.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        self.check_index(move_index)?;
        self.current_move = move_index;
        self.debug_check_invariants("jump");
        Ok(())
    }

    /// Flips the move list between ascending and descending.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) {
        self.display_order = self.display_order.toggled();
        self.debug_check_invariants("toggle");
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived queries
    // ─────────────────────────────────────────────────────────────

    /// Status of the board currently shown, recomputed on every call.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn current_status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.next_player())
    }

    /// Describes the move recorded at `move_index`.
    ///
    /// # Errors
    ///
    /// - `HistoryError::OutOfRange` if no such entry exists
    /// - `HistoryError::Unchanged` if the entry does not differ from its
    ///   predecessor in exactly one square
    #[instrument(skip(self))]
    pub fn move_descriptor(&self, move_index: usize) -> Result<MoveDescriptor, HistoryError> {
        self.check_index(move_index)?;
        if move_index == 0 {
            return Ok(MoveDescriptor::GameStart);
        }

        let before = &self.history[move_index - 1];
        let after = &self.history[move_index];
        match before.diff(after).as_slice() {
            [position] => Ok(MoveDescriptor::Move {
                number: move_index,
                mover: Player::to_move_after(move_index - 1),
                position: *position,
            }),
            _ => Err(HistoryError::Unchanged(move_index)),
        }
    }

    /// History indices in display order.
    pub fn list_moves(&self) -> Vec<usize> {
        let moves = 0..self.history.len();
        match self.display_order {
            DisplayOrder::Ascending => moves.collect(),
            DisplayOrder::Descending => moves.rev().collect(),
        }
    }

    /// One entry per history board, in display order.
    ///
    /// # Errors
    ///
    /// Propagates [`GameEngine::move_descriptor`] failures.
    #[instrument(skip(self))]
    pub fn move_entries(&self) -> Result<Vec<MoveEntry>, HistoryError> {
        self.list_moves()
            .into_iter()
            .map(|index| {
                Ok(MoveEntry {
                    index,
                    descriptor: self.move_descriptor(index)?,
                    is_current: index == self.current_move,
                })
            })
            .collect()
    }

    fn debug_check_invariants(&self, operation: &str) {
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariant violated after {}",
            operation
        );
    }

    fn check_index(&self, index: usize) -> Result<(), HistoryError> {
        if index < self.history.len() {
            Ok(())
        } else {
            Err(HistoryError::OutOfRange {
                index,
                len: self.history.len(),
            })
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_move(), 0);
        assert_eq!(engine.display_order(), DisplayOrder::Ascending);
        assert_eq!(engine.next_player(), Player::X);
    }

    #[test]
    fn test_apply_move_alternates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).expect("empty cell");
        engine.apply_move(0).expect("empty cell");
        assert_eq!(engine.current_board().get(Position::Center).player(), Some(Player::X));
        assert_eq!(engine.current_board().get(Position::TopLeft).player(), Some(Player::O));
        assert_eq!(engine.current_move(), 2);
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).expect("empty cell");
        let before = engine.clone();

        assert_eq!(
            engine.apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(engine.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.jump_to(1),
            Err(HistoryError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(engine.current_move(), 0);
    }

    #[test]
    fn test_apply_is_silent_on_rejection() {
        let engine = GameEngine::new().apply(Command::Play(Position::Center));
        let same = engine.apply(Command::Play(Position::Center));
        assert_eq!(same, engine);
        let same = engine.apply(Command::JumpTo(7));
        assert_eq!(same, engine);
    }

    #[test]
    fn test_toggle_flips_list() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).expect("empty cell");
        engine.apply_move(1).expect("empty cell");
        engine.toggle_display_order();
        assert_eq!(engine.list_moves(), vec![2, 1, 0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "engine invariant violated after jump")]
    fn test_in_place_jump_checks_invariants() {
        let mut engine = GameEngine::new();
        engine.history.push(
            Board::new()
                .with_mark(Position::TopLeft, Player::X)
                .with_mark(Position::Center, Player::X),
        );
        let _ = engine.jump_to(0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "engine invariant violated after play")]
    fn test_in_place_play_checks_invariants() {
        let mut engine = GameEngine::new();
        engine.history[0] = Board::new().with_mark(Position::Center, Player::O);
        let _ = engine.play(Position::TopLeft);
    }

    #[test]
    fn test_display_order_text() {
        assert_eq!(DisplayOrder::Descending.to_string(), "descending");
        assert_eq!(DisplayOrder::Ascending.toggled(), DisplayOrder::Descending);
    }
}
