//! Game engine implementation.

use tracing::{debug, trace, warn};

use super::status::{GameSnapshot, GameStatus, HistoryEntry};
use crate::core::{score, Code, GameError, Score};
use crate::generator::{CodeGenerator, RandomCodeGenerator};

/// Attempts allowed per game.
pub const MAX_ATTEMPTS: u32 = 6;

/// Single-player Bulls and Cows engine.
///
/// Not meant for concurrent use; wrap it in a mutex if several threads
/// must share one game.
///
/// ## Example
///
/// ```
/// use bulls_cows::engine::{GameEngine, GameStatus};
/// use bulls_cows::generator::FixedCodeGenerator;
///
/// let mut game = GameEngine::builder()
///     .generator(FixedCodeGenerator::new([1, 2, 3, 4]))
///     .build()
///     .unwrap();
///
/// assert!(game.is_valid_input(&[1, 3, 2, 5]));
/// assert_eq!(game.process_guess(&[1, 3, 2, 5]).unwrap().to_string(), "1A2B");
/// assert_eq!(game.process_guess(&[1, 2, 3, 4]).unwrap().to_string(), "4A0B");
/// assert_eq!(game.status(), GameStatus::Won);
/// ```
pub struct GameEngine {
    generator: Box<dyn CodeGenerator>,
    secret: Code,
    remaining_attempts: u32,
    won: bool,
    history: Vec<HistoryEntry>,
}

impl GameEngine {
    /// Engine with a [`RandomCodeGenerator`] seeded from OS entropy.
    pub fn new() -> Result<Self, GameError> {
        Self::builder().build()
    }

    /// Engine drawing secrets from `generator`.
    ///
    /// Fails with [`GameError::GeneratorFailure`] if the first code drawn is
    /// invalid.
    pub fn with_generator(mut generator: Box<dyn CodeGenerator>) -> Result<Self, GameError> {
        let secret = draw_secret(generator.as_mut())?;
        debug!(generator = generator.name(), seed = ?generator.seed(), "Engine created");

        Ok(Self {
            generator,
            secret,
            remaining_attempts: MAX_ATTEMPTS,
            won: false,
            history: Vec::with_capacity(MAX_ATTEMPTS as usize),
        })
    }

    /// Start configuring an engine.
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    /// Begin a fresh game with a new secret from the same generator.
    ///
    /// Resets attempts, the win flag, and history. If the generator
    /// misbehaves the current state is left untouched and the error is
    /// returned.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        let secret = draw_secret(self.generator.as_mut())?;

        self.secret = secret;
        self.remaining_attempts = MAX_ATTEMPTS;
        self.won = false;
        self.history.clear();

        debug!(generator = self.generator.name(), "New game started");
        trace!(secret = %self.secret, "Secret drawn");
        Ok(())
    }

    /// Is `candidate` a well-formed guess?
    ///
    /// Exactly four values, each in `0..=9`, none repeated. Pure.
    #[must_use]
    pub fn is_valid_input(&self, candidate: &[i32]) -> bool {
        Code::is_valid(candidate)
    }

    /// Score a guess and record it.
    ///
    /// Every accepted guess uses one attempt, including a winning one.
    /// Invalid guesses return [`GameError::InvalidGuess`] and use nothing;
    /// guesses after the game has ended return [`GameError::GameOver`].
    pub fn process_guess(&mut self, guess: &[i32]) -> Result<Score, GameError> {
        if self.status().is_terminal() {
            warn!(status = %self.status(), "Guess submitted after game end");
            return Err(GameError::GameOver);
        }

        let guess = Code::try_from(guess).map_err(|err| {
            warn!(?guess, error = %err, "Rejected guess");
            err
        })?;

        let result = score(&self.secret, &guess);

        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        if result.is_win() {
            self.won = true;
        }
        self.history.push(HistoryEntry {
            guess,
            score: result,
        });

        debug!(
            guess = %guess,
            result = %result,
            remaining = self.remaining_attempts,
            "Guess scored"
        );
        Ok(result)
    }

    /// Has any guess this game scored four exact matches?
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Attempts are used up and the game was not won.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.remaining_attempts == 0 && !self.won
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.has_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Guesses made this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The current secret. Meant for revealing on loss and for tests.
    #[must_use]
    pub fn secret_code(&self) -> &Code {
        &self.secret
    }

    /// Name of the generator in use.
    #[must_use]
    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Seed of the generator, when it is seeded.
    ///
    /// Passing this back through [`GameEngineBuilder::seed`] replays the same
    /// sequence of secrets.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.generator.seed()
    }

    /// Read-only copy of the game, hiding the secret while in progress.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let status = self.status();
        GameSnapshot {
            status,
            remaining_attempts: self.remaining_attempts,
            history: self.history.clone(),
            secret: status.is_terminal().then_some(self.secret),
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("generator", &self.generator.name())
            .field("remaining_attempts", &self.remaining_attempts)
            .field("won", &self.won)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

fn draw_secret(generator: &mut dyn CodeGenerator) -> Result<Code, GameError> {
    let digits = generator.generate_code();
    Code::new(digits).map_err(|err| {
        let reason = match err {
            GameError::InvalidGuess { reason } => reason,
            other => other.to_string(),
        };
        warn!(generator = generator.name(), ?digits, %reason, "Generator produced an invalid code");
        GameError::GeneratorFailure {
            generator: generator.name(),
            digits,
            reason,
        }
    })
}

/// Builder for [`GameEngine`].
///
/// Without a generator or seed, secrets come from a [`RandomCodeGenerator`]
/// seeded from OS entropy.
#[derive(Default)]
pub struct GameEngineBuilder {
    generator: Option<Box<dyn CodeGenerator>>,
    seed: Option<u64>,
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a [`RandomCodeGenerator`] with this seed.
    ///
    /// Ignored when an explicit generator is set.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom generator.
    #[must_use]
    pub fn generator(mut self, generator: impl CodeGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Build the engine and start the first game.
    pub fn build(self) -> Result<GameEngine, GameError> {
        let generator = match (self.generator, self.seed) {
            (Some(generator), _) => generator,
            (None, Some(seed)) => Box::new(RandomCodeGenerator::with_seed(seed)),
            (None, None) => Box::new(RandomCodeGenerator::new()),
        };
        GameEngine::with_generator(generator)
    }
}
