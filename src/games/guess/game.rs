//! A single round of guess the number.

use std::cmp::Ordering;

use crate::core::GameRng;
use crate::error::Result;

use super::GuessConfig;

/// How a guess compares to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
}

impl GuessOutcome {
    /// Feedback line shown to the player.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            GuessOutcome::TooLow => "Too low!",
            GuessOutcome::TooHigh => "Too high!",
            GuessOutcome::Correct => "Correct!",
        }
    }
}

/// One game: a fixed target inside the configured bounds.
///
/// A replay builds a new `GuessingGame`; nothing is reset in place.
#[derive(Clone, Debug)]
pub struct GuessingGame {
    config: GuessConfig,
    target: i64,
    attempts: u32,
}

impl GuessingGame {
    /// Start a game with a target drawn uniformly from the configured bounds.
    pub fn new(config: GuessConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        let target = rng.gen_in_range(config.min, config.max)?;
        Ok(Self::with_target(config, target))
    }

    /// Start a game with a known target.
    pub fn with_target(config: GuessConfig, target: i64) -> Self {
        debug_assert!(
            (config.min..=config.max).contains(&target),
            "target {target} outside {}-{}",
            config.min,
            config.max
        );
        Self {
            config,
            target,
            attempts: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GuessConfig {
        &self.config
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Number of guesses checked so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Compare a guess with the target.
    pub fn check(&mut self, guess: i64) -> GuessOutcome {
        self.attempts = self.attempts.saturating_add(1);
        match guess.cmp(&self.target) {
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
            Ordering::Equal => GuessOutcome::Correct,
        }
    }
}
