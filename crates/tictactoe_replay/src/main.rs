//! Tic-tac-toe replay driver.
//!
//! Feeds scripted commands through the history engine and prints what a view
//! would render afterwards.

#![warn(missing_docs)]

mod cli;
mod snapshot;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use snapshot::Snapshot;
use tictactoe_history::{EngineConfig, GameEngine};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let engine = replay(config.build_engine(), &cli)?;
    let snapshot = Snapshot::of(&engine).context("building snapshot")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", snapshot.render());
    }

    Ok(())
}

/// Applies every command in order, like a view dispatching clicks.
#[instrument(skip(engine, cli), fields(commands = cli.commands.len(), strict = cli.strict))]
fn replay(engine: GameEngine, cli: &Cli) -> Result<GameEngine> {
    let mut engine = engine;
    for (step, command) in cli.commands.iter().enumerate() {
        match engine.try_apply(*command) {
            Ok(next) => engine = next,
            Err(e) if cli.strict => {
                return Err(e).with_context(|| format!("command {} ({})", step + 1, command));
            }
            Err(e) => warn!(step = step + 1, %command, error = %e, "Ignoring rejected command"),
        }
    }
    info!(
        history_len = engine.history().len(),
        current_move = engine.current_move(),
        "Replay finished"
    );
    Ok(engine)
}
