//! Rock Paper Scissors against a uniformly random opponent.
//!
//! - A match is best of three decisive rounds; ties are replayed
//! - The human answers `R`, `P` or `S`; anything else is an `Invalid`
//!   throw, which loses the round
//! - After each match the player may ask for a rematch

mod choice;
pub mod session;
mod state;

pub use choice::{Choice, Throw};
pub use session::{play_match, play_round, run};
pub use state::{MatchConfig, MatchState, RoundResult};
