//! # parlor-games
//!
//! Two small console games sharing a deterministic random generator and a
//! line-oriented console reader:
//!
//! - **Guess the number**: find a secret integer in a configured range,
//!   guided by "too low" / "too high" hints.
//! - **Rock Paper Scissors**: a best-of-three match against a random
//!   opponent, ties replayed.
//!
//! ## Design Principles
//!
//! 1. **Injectable I/O**: Game loops talk to a [`Console`] generic over
//!    `BufRead`/`Write`, so whole sessions run against in-memory buffers.
//!
//! 2. **Seedable randomness**: [`GameRng`] wraps ChaCha8. The same seed
//!    replays the same targets and opponent throws.
//!
//! 3. **Replay is a loop**: "Play again?" builds a fresh game inside an
//!    outer loop. Nothing carries over between games.
//!
//! ## Modules
//!
//! - `core`: RNG and console input
//! - `games`: the guessing game and rock-paper-scissors

pub mod core;
pub mod error;
pub mod games;

pub use crate::core::{Console, GameRng, Reply};
pub use crate::error::{Error, Result};
pub use crate::games::SessionEnd;

pub use crate::games::guess::{GuessConfig, GuessOutcome, GuessingGame};

pub use crate::games::rps::{Choice, MatchConfig, MatchState, RoundResult, Throw};
