//! Secret code generation.
//!
//! The engine never draws a secret itself; it asks a [`CodeGenerator`].
//! Production games use [`RandomCodeGenerator`]. Tests inject
//! [`FixedCodeGenerator`] or [`ScriptedCodeGenerator`] to make games
//! deterministic.
//!
//! Generators hand back raw digits. The engine validates them and reports
//! anything that is not a valid code as
//! [`GameError::GeneratorFailure`](crate::core::GameError::GeneratorFailure).

mod random;
mod scripted;

pub use random::RandomCodeGenerator;
pub use scripted::{FixedCodeGenerator, ScriptedCodeGenerator};

use crate::core::{Digit, CODE_LENGTH};

/// Source of secret codes.
///
/// ## Contract
///
/// Every call should return [`CODE_LENGTH`] pairwise-distinct digits in
/// `0..=9`. The distribution is up to the implementation.
pub trait CodeGenerator {
    /// Produce the digits of a new secret code.
    fn generate_code(&mut self) -> [Digit; CODE_LENGTH];

    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Seed that reproduces this generator's codes, if it has one.
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for Box<G> {
    fn generate_code(&mut self) -> [Digit; CODE_LENGTH] {
        (**self).generate_code()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}
