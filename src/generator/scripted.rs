//! Deterministic generators for tests and reproducible sessions.

use std::collections::VecDeque;

use super::CodeGenerator;
use crate::core::{Code, Digit, CODE_LENGTH};

/// Always returns the same digits.
///
/// Digits are not validated here so tests can exercise the engine's
/// handling of a misbehaving generator.
#[derive(Clone, Copy, Debug)]
pub struct FixedCodeGenerator {
    digits: [Digit; CODE_LENGTH],
}

impl FixedCodeGenerator {
    #[must_use]
    pub const fn new(digits: [Digit; CODE_LENGTH]) -> Self {
        Self { digits }
    }
}

impl From<Code> for FixedCodeGenerator {
    fn from(code: Code) -> Self {
        Self::new(*code.digits())
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate_code(&mut self) -> [Digit; CODE_LENGTH] {
        self.digits
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Returns codes from a script in order, cycling when it runs out.
///
/// The position in the script persists across games, so an engine that
/// replays with the same generator sees the next scripted code.
#[derive(Clone, Debug)]
pub struct ScriptedCodeGenerator {
    script: VecDeque<[Digit; CODE_LENGTH]>,
}

impl ScriptedCodeGenerator {
    /// Panics if the script is empty.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = [Digit; CODE_LENGTH]>) -> Self {
        let script: VecDeque<_> = script.into_iter().collect();
        assert!(!script.is_empty(), "Script must contain at least one code");
        Self { script }
    }

    /// Number of codes in the script.
    #[must_use]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl CodeGenerator for ScriptedCodeGenerator {
    fn generate_code(&mut self) -> [Digit; CODE_LENGTH] {
        self.script.rotate_left(1);
        // rotate_left moved the head to the back
        self.script[self.script.len() - 1]
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_repeats() {
        let mut generator = FixedCodeGenerator::new([3, 1, 4, 5]);
        assert_eq!(generator.generate_code(), [3, 1, 4, 5]);
        assert_eq!(generator.generate_code(), [3, 1, 4, 5]);
    }

    #[test]
    fn test_fixed_from_code() {
        let code = Code::new([0, 9, 8, 7]).unwrap();
        let mut generator = FixedCodeGenerator::from(code);
        assert_eq!(generator.generate_code(), [0, 9, 8, 7]);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut generator = ScriptedCodeGenerator::new([[1, 2, 3, 4], [5, 6, 7, 8]]);
        assert_eq!(generator.len(), 2);
        assert_eq!(generator.generate_code(), [1, 2, 3, 4]);
        assert_eq!(generator.generate_code(), [5, 6, 7, 8]);
        assert_eq!(generator.generate_code(), [1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "Script must contain at least one code")]
    fn test_scripted_empty() {
        let _ = ScriptedCodeGenerator::new(std::iter::empty());
    }
}
