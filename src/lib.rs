//! # bulls-cows
//!
//! A single-player Bulls and Cows code-breaking game.
//!
//! A secret code of four distinct digits is drawn; the player has six
//! attempts to find it. Each guess is scored as `xAyB`: `x` digits are right
//! and in the right place, `y` are right but misplaced.
//!
//! ## Design Principles
//!
//! 1. **Validated Codes**: A [`Code`] can only be built through validation,
//!    so scoring never sees an out-of-range or repeated digit.
//!
//! 2. **Injected Randomness**: The engine asks a [`CodeGenerator`] for each
//!    secret. Seeded and scripted generators make games reproducible.
//!
//! 3. **Thin I/O**: All game logic lives in [`GameEngine`]; the driver only
//!    parses lines and prints results.
//!
//! ## Modules
//!
//! - `core`: Digits and codes, scoring, RNG, errors
//! - `generator`: `CodeGenerator` trait and implementations
//! - `engine`: Game state, attempts, history, status
//! - `driver`: Interactive line-based session

pub mod core;
pub mod driver;
pub mod engine;
pub mod generator;

// Re-export commonly used types
pub use crate::core::{score, Code, Digit, GameError, GameRng, Score, CODE_LENGTH};

pub use crate::engine::{
    GameEngine, GameEngineBuilder, GameSnapshot, GameStatus, HistoryEntry, MAX_ATTEMPTS,
};

pub use crate::generator::{
    CodeGenerator, FixedCodeGenerator, RandomCodeGenerator, ScriptedCodeGenerator,
};

pub use crate::driver::{DriverConfig, DriverError, Session, SessionSummary};
