//! Game rules for tic-tac-toe.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, calculate_winner};
