//! The two games.
//!
//! - [`guess`]: Guess the number within a configured range
//! - [`rps`]: Best-of-three Rock Paper Scissors
//!
//! Each game exposes its rules as plain types (`GuessingGame`, `MatchState`)
//! and a `run` function that drives whole sessions over a
//! [`Console`](crate::core::Console), replays included. The games share
//! nothing beyond `core` and [`SessionEnd`].

use std::process::ExitCode;

pub mod guess;
pub mod rps;

/// How a session (one or more games plus replays) ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player declined to play again.
    Declined,
    /// Input ran out in the middle of a game.
    InputClosed,
}

impl SessionEnd {
    /// Process exit status for this ending: 0 on a declined replay, 2 when
    /// input closed mid-game.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            SessionEnd::Declined => 0,
            SessionEnd::InputClosed => 2,
        }
    }
}

impl From<SessionEnd> for ExitCode {
    fn from(end: SessionEnd) -> Self {
        ExitCode::from(end.exit_code())
    }
}
