//! Core types: digits and codes, scoring, RNG, errors.
//!
//! Everything here is independent of how a game is driven; the engine and
//! the generators are built on top of these pieces.

pub mod code;
pub mod error;
pub mod rng;
pub mod score;

pub use code::{Code, Digit, CODE_LENGTH, MAX_DIGIT};
pub use error::GameError;
pub use rng::GameRng;
pub use score::{score, ParseScoreError, Score};
