//! Guess scoring.
//!
//! A guess is scored against the secret in two passes:
//!
//! 1. **Exact** (`A`): same digit at the same position. Both positions are
//!    consumed.
//! 2. **Partial** (`B`): for each unconsumed guess position, the first
//!    unconsumed secret position holding the same digit is consumed.
//!
//! No digit occurrence is counted twice on either side. Results render as
//! `"{exact}A{partial}B"`:
//!
//! ```
//! use bulls_cows::core::{score, Code};
//!
//! let secret = Code::new([1, 2, 3, 4]).unwrap();
//! let guess = Code::new([1, 3, 2, 5]).unwrap();
//! assert_eq!(score(&secret, &guess).to_string(), "1A2B");
//! ```

use serde::{Deserialize, Serialize};

use super::code::{Code, CODE_LENGTH};

/// Exact and partial match counts for one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Right digit, right position.
    pub exact: u8,
    /// Right digit, wrong position.
    pub partial: u8,
}

impl Score {
    /// Create a score from raw counts.
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Did the guess match every position?
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Total matched digits.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.exact + self.partial
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}A{}B", self.exact, self.partial)
    }
}

/// Error parsing an `xAyB` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed score `{0}`, expected the form xAyB")]
pub struct ParseScoreError(String);

impl std::str::FromStr for Score {
    type Err = ParseScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseScoreError(s.to_string());
        let (exact, rest) = s.split_once('A').ok_or_else(malformed)?;
        let partial = rest.strip_suffix('B').ok_or_else(malformed)?;
        let count = |part: &str| -> Result<u8, ParseScoreError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };
        let exact = count(exact)?;
        let partial = count(partial)?;
        if (exact as usize + partial as usize) > CODE_LENGTH {
            return Err(malformed());
        }
        Ok(Self { exact, partial })
    }
}

/// Score `guess` against `secret`.
#[must_use]
pub fn score(secret: &Code, guess: &Code) -> Score {
    let secret = secret.digits();
    let guess = guess.digits();

    let mut secret_used = [false; CODE_LENGTH];
    let mut guess_used = [false; CODE_LENGTH];
    let mut result = Score::default();

    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            result.exact += 1;
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    for i in 0..CODE_LENGTH {
        if guess_used[i] {
            continue;
        }
        let hit = (0..CODE_LENGTH).find(|&j| !secret_used[j] && guess[i] == secret[j]);
        if let Some(j) = hit {
            result.partial += 1;
            secret_used[j] = true;
        }
    }

    result
}
