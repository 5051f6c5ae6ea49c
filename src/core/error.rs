//! Error types for the game engine.

use super::code::{Digit, CODE_LENGTH};

/// Errors raised by codes, generators, and the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A candidate guess broke the range or distinctness rules.
    ///
    /// Recoverable: the caller should reject the input and re-prompt.
    #[error("invalid guess: {reason}")]
    InvalidGuess { reason: String },

    /// The code generator produced something that is not a valid code.
    ///
    /// Fatal to the game being started.
    #[error("code generator `{generator}` produced an invalid code {digits:?}: {reason}")]
    GeneratorFailure {
        generator: &'static str,
        digits: [Digit; CODE_LENGTH],
        reason: String,
    },

    /// A guess was submitted after the game was already won or lost.
    #[error("the game is over; start a new game to keep playing")]
    GameOver,
}

impl GameError {
    pub(crate) fn invalid_guess(reason: impl Into<String>) -> Self {
        Self::InvalidGuess {
            reason: reason.into(),
        }
    }

    /// Is this the recoverable "reject and re-prompt" kind?
    #[must_use]
    pub fn is_invalid_guess(&self) -> bool {
        matches!(self, Self::InvalidGuess { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::invalid_guess("digit 3 appears more than once");
        assert_eq!(err.to_string(), "invalid guess: digit 3 appears more than once");
        assert!(err.is_invalid_guess());

        let err = GameError::GeneratorFailure {
            generator: "fixed",
            digits: [1, 1, 2, 3],
            reason: "duplicate".into(),
        };
        assert!(err.to_string().contains("`fixed`"));
        assert!(!err.is_invalid_guess());

        assert!(!GameError::GameOver.is_invalid_guess());
    }
}
