//! Line-based interactive driver.
//!
//! A thin layer over [`GameEngine`](crate::engine::GameEngine): it reads
//! guesses as four whitespace-separated integers, rejects unusable lines
//! with `Wrong Input, Input again`, prints each `xAyB` result, reveals the
//! secret on a loss, and offers a replay on the same engine.
//!
//! The session works over any `BufRead`/`Write` pair, so it can be tested
//! with in-memory buffers.

mod config;
mod input;
mod session;

pub use config::DriverConfig;
pub use input::{is_yes, parse_guess};
pub use session::{Session, SessionSummary, WRONG_INPUT};

use crate::core::GameError;

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("game error: {0}")]
    Game(#[from] GameError),
}
