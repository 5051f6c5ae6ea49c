//! The game-state engine.
//!
//! [`GameEngine`] owns a [`CodeGenerator`](crate::generator::CodeGenerator),
//! the current secret, the attempt counter, the win flag, and the guess
//! history. Drivers construct one, validate candidates with
//! [`GameEngine::is_valid_input`], score them with
//! [`GameEngine::process_guess`], and poll [`GameEngine::status`] to decide
//! when to stop.
//!
//! ## Lifecycle
//!
//! ```text
//! start_new_game ──> InProgress ──(4A)──────────────> Won
//!                        │
//!                        └──(attempts exhausted)────> Lost
//! ```
//!
//! `Won` and `Lost` are terminal until `start_new_game` runs again.

mod game;
mod status;

pub use game::{GameEngine, GameEngineBuilder, MAX_ATTEMPTS};
pub use status::{GameSnapshot, GameStatus, HistoryEntry};
