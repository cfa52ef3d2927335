//! Match configuration, round results and the running score.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{Choice, Throw};

/// Match length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Decisive (non-tied) rounds per match. Must be odd.
    pub rounds: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { rounds: 3 }
    }
}

impl MatchConfig {
    /// Best of three.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(Error::invalid_config("a match needs at least one round"));
        }
        if self.rounds % 2 == 0 {
            return Err(Error::invalid_config(format!(
                "round count {} is even, so a match could end level",
                self.rounds
            )));
        }
        Ok(())
    }
}

/// Outcome of one round, from the human's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    Tie,
    Win,
    Loss,
}

impl RoundResult {
    /// Compare the human's throw with the opponent's hand.
    ///
    /// ```
    /// use parlor_games::{Choice, RoundResult, Throw};
    ///
    /// let rock = Throw::Valid(Choice::Rock);
    /// assert_eq!(RoundResult::resolve(rock, Choice::Scissors), RoundResult::Win);
    /// assert_eq!(RoundResult::resolve(rock, Choice::Paper), RoundResult::Loss);
    /// assert_eq!(RoundResult::resolve(rock, Choice::Rock), RoundResult::Tie);
    /// assert_eq!(RoundResult::resolve(Throw::Invalid, Choice::Rock), RoundResult::Loss);
    /// ```
    #[must_use]
    pub fn resolve(human: Throw, opponent: Choice) -> Self {
        if human == Throw::Valid(opponent) {
            RoundResult::Tie
        } else if human.beats(opponent) {
            RoundResult::Win
        } else {
            RoundResult::Loss
        }
    }
}

/// Score of the match in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchState {
    rounds: u32,
    wins: u32,
    total_rounds: u32,
}

impl MatchState {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            rounds: 0,
            wins: 0,
            total_rounds: config.rounds,
        }
    }

    /// Count a round. Ties don't count.
    pub fn record(&mut self, result: RoundResult) {
        debug_assert!(!self.is_complete(), "round recorded after match end");
        match result {
            RoundResult::Tie => {}
            RoundResult::Win => {
                self.rounds += 1;
                self.wins += 1;
            }
            RoundResult::Loss => self.rounds += 1,
        }
    }

    /// Decisive rounds played.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.rounds - self.wins
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rounds >= self.total_rounds
    }

    /// Whether the human holds a majority of the match's rounds.
    #[must_use]
    pub fn player_won(&self) -> bool {
        self.wins * 2 > self.total_rounds
    }
}
