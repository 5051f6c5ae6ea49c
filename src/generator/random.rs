//! Uniform random code generator.

use super::CodeGenerator;
use crate::core::{Digit, GameRng, CODE_LENGTH, MAX_DIGIT};

/// Draws codes uniformly from all 5040 valid codes.
///
/// Shuffles the ten digits and keeps the first four.
#[derive(Clone, Debug)]
pub struct RandomCodeGenerator {
    rng: GameRng,
}

impl RandomCodeGenerator {
    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for reproducible games.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate_code(&mut self) -> [Digit; CODE_LENGTH] {
        let mut digits: [Digit; MAX_DIGIT as usize + 1] = std::array::from_fn(|i| i as Digit);
        self.rng.shuffle(&mut digits);

        let mut code = [0; CODE_LENGTH];
        code.copy_from_slice(&digits[..CODE_LENGTH]);
        code
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn seed(&self) -> Option<u64> {
        Some(self.rng.seed())
    }
}
