//! Hands and the beats relation.

use std::fmt;

use crate::core::GameRng;

/// A legal hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Whether `self` wins against `other`.
    ///
    /// Rock crushes Scissors, Scissors cut Paper, Paper covers Rock.
    ///
    /// ```
    /// use parlor_games::Choice;
    ///
    /// assert!(Choice::Rock.beats(Choice::Scissors));
    /// assert!(!Choice::Scissors.beats(Choice::Rock));
    /// assert!(!Choice::Paper.beats(Choice::Paper));
    /// ```
    #[must_use]
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    /// Parse a single-letter answer (`R`, `P` or `S`, any case).
    #[must_use]
    pub fn parse(input: &str) -> Option<Choice> {
        match input {
            "R" | "r" => Some(Choice::Rock),
            "P" | "p" => Some(Choice::Paper),
            "S" | "s" => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// Uniform random hand.
    pub fn random(rng: &mut GameRng) -> Choice {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// What the human actually played.
///
/// Unparsable answers aren't rejected; they become `Invalid`, which loses
/// to every hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Throw {
    Valid(Choice),
    Invalid,
}

impl Throw {
    /// `Invalid` never beats anything.
    #[must_use]
    pub fn beats(self, other: Choice) -> bool {
        match self {
            Throw::Valid(choice) => choice.beats(other),
            Throw::Invalid => false,
        }
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Throw::Valid(choice) => fmt::Display::fmt(choice, f),
            Throw::Invalid => f.write_str("Invalid"),
        }
    }
}
