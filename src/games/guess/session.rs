//! Console loop for the guessing game.

use std::io::{BufRead, Write};

use crate::core::{Console, GameRng, Reply};
use crate::error::Result;
use crate::games::SessionEnd;

use super::{GuessConfig, GuessOutcome, GuessingGame};

pub const GUESS_PROMPT: &str = "Enter your guess:";
pub const REPLAY_PROMPT: &str = "Want to play again? Y/N";
pub const FAREWELL: &str = "Thanks for playing!";

/// Play one game until the target is found.
///
/// Unparsable guesses are answered with a hint and don't count as attempts.
/// Returns the number of attempts, or `None` if input ran out first.
pub fn play<R: BufRead, W: Write>(
    game: &mut GuessingGame,
    console: &mut Console<R, W>,
) -> Result<Option<u32>> {
    let GuessConfig { min, max } = *game.config();
    console.say(format_args!("Guess the number! {min}-{max}"))?;

    loop {
        match console.read_int(Some(GUESS_PROMPT))? {
            Reply::Value(guess) => {
                let outcome = game.check(guess);
                console.say(outcome.message())?;
                if outcome == GuessOutcome::Correct {
                    return Ok(Some(game.attempts()));
                }
            }
            Reply::Unparsed(_) => {
                console.say(format_args!(
                    "Please enter a valid number between {min} and {max}."
                ))?;
            }
            Reply::Closed => return Ok(None),
        }
    }
}

/// Play games with fresh targets until the player declines a replay.
pub fn run<R: BufRead, W: Write>(
    config: &GuessConfig,
    rng: &mut GameRng,
    console: &mut Console<R, W>,
) -> Result<SessionEnd> {
    config.validate()?;

    loop {
        let mut game = GuessingGame::new(*config, rng)?;
        if play(&mut game, console)?.is_none() {
            return Ok(SessionEnd::InputClosed);
        }

        if !console.confirm(REPLAY_PROMPT)? {
            console.say(FAREWELL)?;
            return Ok(SessionEnd::Declined);
        }
    }
}
