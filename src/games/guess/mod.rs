//! Guess the number.
//!
//! - A secret target is drawn from `[min, max]` (1-100 by default)
//! - Each guess is answered with "Too low!", "Too high!" or "Correct!"
//! - Unparsable guesses get a reminder of the bounds and cost nothing
//! - After a win the player may replay with a fresh target

mod config;
mod game;
pub mod session;

pub use config::GuessConfig;
pub use game::{GuessOutcome, GuessingGame};
pub use session::{play, run};
