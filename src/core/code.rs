//! Digits and codes.
//!
//! ## Code
//!
//! An ordered sequence of exactly [`CODE_LENGTH`] pairwise-distinct digits
//! in `0..=9`. The same type is used for the secret and for every guess.
//!
//! A `Code` can only be built through validation, so holding one is proof
//! that the range and distinctness invariants hold:
//!
//! ```
//! use bulls_cows::core::Code;
//!
//! let code = Code::new([1, 2, 3, 4]).unwrap();
//! assert_eq!(code.digits(), &[1, 2, 3, 4]);
//!
//! assert!(Code::new([1, 1, 2, 3]).is_err());
//! assert!(Code::try_from([0i32, 1, 2, 10].as_slice()).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Number of digits in a code.
pub const CODE_LENGTH: usize = 4;

/// Largest allowed digit value.
pub const MAX_DIGIT: Digit = 9;

/// A single digit in `0..=MAX_DIGIT`.
pub type Digit = u8;

/// Validated code of [`CODE_LENGTH`] distinct digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Digit; CODE_LENGTH]", into = "[Digit; CODE_LENGTH]")]
pub struct Code([Digit; CODE_LENGTH]);

impl Code {
    /// Build a code, checking range and distinctness.
    pub fn new(digits: [Digit; CODE_LENGTH]) -> Result<Self, GameError> {
        let mut seen = [false; MAX_DIGIT as usize + 1];
        for &digit in &digits {
            if digit > MAX_DIGIT {
                return Err(GameError::invalid_guess(format!(
                    "digit {digit} is out of range 0-{MAX_DIGIT}"
                )));
            }
            if seen[digit as usize] {
                return Err(GameError::invalid_guess(format!(
                    "digit {digit} appears more than once"
                )));
            }
            seen[digit as usize] = true;
        }
        Ok(Self(digits))
    }

    /// The digits in positional order.
    #[must_use]
    pub const fn digits(&self) -> &[Digit; CODE_LENGTH] {
        &self.0
    }

    /// Check a raw candidate without building a code.
    ///
    /// True iff the candidate has exactly [`CODE_LENGTH`] elements, every
    /// element is in `0..=9`, and no value repeats.
    #[must_use]
    pub fn is_valid(candidate: &[i32]) -> bool {
        Self::try_from(candidate).is_ok()
    }
}

impl TryFrom<[Digit; CODE_LENGTH]> for Code {
    type Error = GameError;

    fn try_from(digits: [Digit; CODE_LENGTH]) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl TryFrom<&[i32]> for Code {
    type Error = GameError;

    fn try_from(candidate: &[i32]) -> Result<Self, Self::Error> {
        if candidate.len() != CODE_LENGTH {
            return Err(GameError::invalid_guess(format!(
                "expected {CODE_LENGTH} digits, got {}",
                candidate.len()
            )));
        }

        let mut digits = [0; CODE_LENGTH];
        for (slot, &value) in digits.iter_mut().zip(candidate) {
            *slot = Digit::try_from(value)
                .ok()
                .filter(|d| *d <= MAX_DIGIT)
                .ok_or_else(|| {
                    GameError::invalid_guess(format!("digit {value} is out of range 0-{MAX_DIGIT}"))
                })?;
        }
        Self::new(digits)
    }
}

impl From<Code> for [Digit; CODE_LENGTH] {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a} {b} {c} {d}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_distinct_digits() {
        let code = Code::new([9, 0, 5, 3]).unwrap();
        assert_eq!(code.digits(), &[9, 0, 5, 3]);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = Code::new([4, 2, 4, 1]).unwrap_err();
        assert!(matches!(err, GameError::InvalidGuess { .. }));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Code::new([0, 1, 2, 10]).is_err());
    }

    #[test]
    fn test_is_valid_rejects_negative_and_large() {
        assert!(!Code::is_valid(&[-1, 2, 3, 4]));
        assert!(!Code::is_valid(&[1, 2, 3, 300]));
        assert!(!Code::is_valid(&[1, 2, 3, i32::MAX]));
    }

    #[test]
    fn test_is_valid_rejects_wrong_length() {
        assert!(!Code::is_valid(&[]));
        assert!(!Code::is_valid(&[1, 2, 3]));
        assert!(!Code::is_valid(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_is_valid_accepts_edges() {
        assert!(Code::is_valid(&[0, 1, 2, 3]));
        assert!(Code::is_valid(&[9, 8, 7, 6]));
    }

    #[test]
    fn test_display() {
        let code = Code::new([0, 7, 3, 1]).unwrap();
        assert_eq!(format!("{}", code), "0 7 3 1");
    }

    #[test]
    fn test_serde_validates() {
        let code = Code::new([1, 2, 3, 4]).unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "[1,2,3,4]");
        let back: Code = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<Code>("[1,1,2,3]").is_err());
        assert!(serde_json::from_str::<Code>("[1,2,3,12]").is_err());
    }
}
