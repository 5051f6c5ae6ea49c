//! Play Bulls and Cows in the terminal.

use std::io;

use bulls_cows::driver::{DriverConfig, DriverError, Session};
use bulls_cows::engine::GameEngine;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Guess the secret 4-digit code in six attempts
#[derive(Parser, Debug)]
#[command(name = "bulls-cows")]
#[command(version)]
struct Cli {
    /// Seed for the secret code generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Exit after one game instead of offering a replay
    #[arg(long)]
    no_replay: bool,

    /// Do not print previous guesses before each prompt
    #[arg(long)]
    no_history: bool,
}

impl From<Cli> for DriverConfig {
    fn from(cli: Cli) -> Self {
        let config = DriverConfig::default()
            .with_replay(!cli.no_replay)
            .with_history(!cli.no_history);
        match cli.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<(), DriverError> {
    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = DriverConfig::from(Cli::parse());

    let mut builder = GameEngine::builder();
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    let engine = builder.build()?;
    info!(seed = ?engine.seed(), generator = engine.generator_name(), "Starting session");

    let stdin = io::stdin();
    let mut session = Session::new(engine, config, stdin.lock(), io::stdout());
    let summary = session.run()?;
    info!(
        played = summary.games_played,
        won = summary.games_won,
        "Session ended"
    );
    Ok(())
}
