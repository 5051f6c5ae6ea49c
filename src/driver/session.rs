//! Interactive play loop.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::config::DriverConfig;
use super::input::{is_yes, parse_guess};
use super::DriverError;
use crate::engine::{GameEngine, GameStatus, MAX_ATTEMPTS};

/// Message printed when a line cannot be used as a guess.
pub const WRONG_INPUT: &str = "Wrong Input, Input again";

/// Totals for a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: u32,
    pub games_won: u32,
}

/// Drives a [`GameEngine`] over a line-based reader and writer.
///
/// Replays reuse the same engine, and therefore the same generator.
pub struct Session<R, W> {
    engine: GameEngine,
    config: DriverConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: GameEngine, config: DriverConfig, input: R, output: W) -> Self {
        Self {
            engine,
            config,
            input,
            output,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Give back the engine and writer.
    pub fn into_parts(self) -> (GameEngine, W) {
        (self.engine, self.output)
    }

    /// Play games until the player declines a replay or input ends.
    pub fn run(&mut self) -> Result<SessionSummary, DriverError> {
        let mut summary = SessionSummary::default();

        loop {
            let Some(status) = self.play_game()? else {
                debug!("Input closed mid-game");
                break;
            };

            summary.games_played += 1;
            if status == GameStatus::Won {
                summary.games_won += 1;
            }
            info!(%status, played = summary.games_played, "Game finished");

            if !self.config.offer_replay {
                break;
            }
            write!(self.output, "Would you like to play again? (y/n): ")?;
            self.output.flush()?;
            match self.read_answer()? {
                Some(answer) if is_yes(&answer) => {
                    writeln!(self.output)?;
                    self.engine.start_new_game()?;
                }
                _ => break,
            }
        }

        writeln!(self.output, "Thank you for playing!")?;
        self.output.flush()?;
        Ok(summary)
    }

    /// Play the current game to the end. `None` if input ran out first.
    fn play_game(&mut self) -> Result<Option<GameStatus>, DriverError> {
        self.print_banner()?;

        while !self.engine.status().is_terminal() {
            let attempt = MAX_ATTEMPTS - self.engine.remaining_attempts() + 1;
            writeln!(self.output, "Attempt {attempt} of {MAX_ATTEMPTS}")?;
            if self.config.show_history {
                self.print_history()?;
            }

            let Some(guess) = self.read_guess()? else {
                return Ok(None);
            };

            let result = self.engine.process_guess(&guess)?;
            writeln!(self.output, "Result: {result}")?;
            writeln!(self.output)?;

            match self.engine.status() {
                GameStatus::Won => {
                    writeln!(self.output, "Congratulations! You've guessed the secret code!")?;
                }
                GameStatus::Lost => {
                    writeln!(self.output, "Game over! You've used all your attempts.")?;
                    writeln!(
                        self.output,
                        "The secret code was: {}",
                        self.engine.secret_code()
                    )?;
                }
                GameStatus::InProgress => {}
            }
        }

        Ok(Some(self.engine.status()))
    }

    /// Prompt until a valid guess arrives. `None` on end of input.
    fn read_guess(&mut self) -> Result<Option<Vec<i32>>, DriverError> {
        loop {
            write!(
                self.output,
                "Enter your guess (4 distinct digits from 0-9, separated by spaces): "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_guess(&line) {
                Some(guess) if self.engine.is_valid_input(&guess) => return Ok(Some(guess)),
                _ => {
                    debug!(line = line.trim_end(), "Unusable guess line");
                    writeln!(self.output, "{WRONG_INPUT}")?;
                }
            }
        }
    }

    fn print_banner(&mut self) -> Result<(), DriverError> {
        let out = &mut self.output;
        writeln!(out, "Welcome to Guess Number Game!")?;
        writeln!(
            out,
            "Try to guess the 4-digit secret code. Each digit is between 0-9 and no duplicates."
        )?;
        writeln!(out, "After each guess, you'll get feedback in the format xAyB:")?;
        writeln!(out, "- x is the number of correct digits in the correct position (A)")?;
        writeln!(out, "- y is the number of correct digits in the wrong position (B)")?;
        writeln!(
            out,
            "You have {} attempts. Good luck!",
            self.engine.remaining_attempts()
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn print_history(&mut self) -> Result<(), DriverError> {
        let history = self.engine.history();
        if history.is_empty() {
            return Ok(());
        }

        writeln!(self.output, "Previous guesses:")?;
        for (i, entry) in history.iter().enumerate() {
            writeln!(self.output, "  {}: {} -> {}", i + 1, entry.guess, entry.score)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Next line with any non-whitespace content. `None` on end of input.
    fn read_answer(&mut self) -> Result<Option<String>, DriverError> {
        while let Some(line) = self.read_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn read_line(&mut self) -> Result<Option<String>, DriverError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
