//! Command-line interface for tictactoe_replay.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_history::Command;

/// Replays tic-tac-toe commands and prints the resulting game.
///
/// Commands: `play:<cell>` (or a bare cell number 0-8), `jump:<move>`, `toggle`.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Replay tic-tac-toe commands against the history engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Stop at the first rejected command instead of ignoring it
    #[arg(long)]
    pub strict: bool,

    /// Commands to replay, in order
    pub commands: Vec<Command>,
}
