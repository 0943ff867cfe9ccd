//! Property tests over random command sequences.

use proptest::prelude::*;
use tictactoe_history::invariants::{EngineInvariants, InvariantSet};
use tictactoe_history::{
    Board, Command, GameEngine, LINES, Player, Position, Square, calculate_winner,
};

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => (0usize..9).prop_map(|i| Command::Play(Position::ALL[i])),
        2 => (0usize..12).prop_map(Command::JumpTo),
        1 => Just(Command::ToggleOrder),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    let square = prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ];
    proptest::array::uniform9(square).prop_map(|squares| {
        Position::ALL
            .iter()
            .zip(squares)
            .fold(Board::new(), |mut board, (pos, sq)| {
                board.set(*pos, sq);
                board
            })
    })
}

fn run(commands: &[Command]) -> GameEngine {
    commands
        .iter()
        .fold(GameEngine::new(), |engine, cmd| engine.apply(*cmd))
}

proptest! {
    /// Every reachable engine satisfies all invariants.
    #[test]
    fn prop_invariants_hold(commands in proptest::collection::vec(command(), 0..40)) {
        let engine = run(&commands);
        prop_assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    /// Board k in history holds exactly k marks, and cannot be won before move 5.
    #[test]
    fn prop_history_counts(commands in proptest::collection::vec(command(), 0..40)) {
        let engine = run(&commands);
        for (k, board) in engine.history().iter().enumerate() {
            prop_assert_eq!(board.occupied(), k);
            if k < 5 {
                prop_assert!(calculate_winner(board).is_none());
            }
        }
    }

    /// Playing an occupied cell never changes the engine.
    #[test]
    fn prop_occupied_cell_is_noop(
        commands in proptest::collection::vec(command(), 0..40),
        cell in 0usize..9,
    ) {
        let engine = run(&commands);
        let pos = Position::ALL[cell];
        if !engine.current_board().is_empty(pos) {
            prop_assert_eq!(engine.apply(Command::Play(pos)), engine);
        }
    }

    /// Playing after a jump keeps exactly `m + 1` boards before the new one.
    #[test]
    fn prop_jump_then_play_truncates(
        commands in proptest::collection::vec(command(), 0..40),
        target in 0usize..10,
        cell in 0usize..9,
    ) {
        let engine = run(&commands);
        let target = target % engine.history().len();

        let jumped = engine.apply(Command::JumpTo(target));
        let pos = Position::ALL[cell];
        if let Ok(next) = jumped.try_apply(Command::Play(pos)) {
            prop_assert_eq!(next.history().len(), target + 2);
            prop_assert_eq!(&next.history()[..=target], &engine.history()[..=target]);
        }
    }

    /// Toggling twice restores the listing.
    #[test]
    fn prop_double_toggle_restores_listing(commands in proptest::collection::vec(command(), 0..40)) {
        let engine = run(&commands);
        let twice = engine.apply(Command::ToggleOrder).apply(Command::ToggleOrder);
        prop_assert_eq!(twice.list_moves(), engine.list_moves());
    }

    /// Without three of either mark there is no winner.
    #[test]
    fn prop_no_winner_without_three_of_a_mark(board in any_board()) {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        if x < 3 && o < 3 {
            prop_assert!(calculate_winner(&board).is_none());
        }
    }

    /// The reported line is the first complete line, filled with the reported winner.
    #[test]
    fn prop_reported_line_is_filled(board in any_board()) {
        if let Some(win) = calculate_winner(&board) {
            for pos in win.line() {
                prop_assert_eq!(board.get(pos), Square::Occupied(win.winner()));
            }
        }

        let first_complete = LINES.iter().copied().find(|[a, b, c]| {
            board.get(*a) != Square::Empty
                && board.get(*a) == board.get(*b)
                && board.get(*a) == board.get(*c)
        });
        prop_assert_eq!(calculate_winner(&board).map(|win| win.line()), first_complete);
    }
}
