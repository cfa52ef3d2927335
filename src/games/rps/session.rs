//! Console loop for Rock Paper Scissors.

use std::io::{BufRead, Write};

use crate::core::{Console, GameRng, Reply};
use crate::error::Result;
use crate::games::SessionEnd;

use super::{Choice, MatchConfig, MatchState, RoundResult, Throw};

pub const WELCOME: &str = "Welcome to Rock Paper Scissors!";
pub const CHOICE_PROMPT: &str = "(R)ock, (P)aper or (S)cissors?";
pub const DRAW: &str = "It's a draw!";
pub const REPLAY_PROMPT: &str = "Play again? Y/N";
pub const FAREWELL: &str = "Thanks for playing!";

/// Play one round. The opponent's hand is drawn before the human answers.
///
/// Returns `None` if input ran out.
pub fn play_round<R: BufRead, W: Write>(
    rng: &mut GameRng,
    console: &mut Console<R, W>,
) -> Result<Option<RoundResult>> {
    let opponent = Choice::random(rng);
    let human = match console.read_parsed(Some(CHOICE_PROMPT), Choice::parse)? {
        Reply::Value(choice) => Throw::Valid(choice),
        Reply::Unparsed(_) => Throw::Invalid,
        Reply::Closed => return Ok(None),
    };

    let result = RoundResult::resolve(human, opponent);
    match result {
        RoundResult::Tie => console.say(DRAW)?,
        RoundResult::Win => console.say(format_args!("{human} beats {opponent}. You win!"))?,
        RoundResult::Loss => console.say(format_args!("{opponent} beats {human}. You lose!"))?,
    }

    Ok(Some(result))
}

/// Play rounds until the match is decided, then announce the score.
///
/// Ties are replayed without limit. Returns `None` if input ran out.
pub fn play_match<R: BufRead, W: Write>(
    config: &MatchConfig,
    rng: &mut GameRng,
    console: &mut Console<R, W>,
) -> Result<Option<MatchState>> {
    console.say(WELCOME)?;

    let mut state = MatchState::new(config);
    while !state.is_complete() {
        match play_round(rng, console)? {
            Some(result) => state.record(result),
            None => return Ok(None),
        }
    }

    let (wins, losses) = (state.wins(), state.losses());
    if state.player_won() {
        console.say(format_args!("Congratulations. You won {wins}-{losses}!"))?;
    } else {
        console.say(format_args!("Sorry. You lost {wins}-{losses}..."))?;
    }

    Ok(Some(state))
}

/// Play fresh matches until the player declines a rematch.
pub fn run<R: BufRead, W: Write>(
    config: &MatchConfig,
    rng: &mut GameRng,
    console: &mut Console<R, W>,
) -> Result<SessionEnd> {
    config.validate()?;

    loop {
        if play_match(config, rng, console)?.is_none() {
            return Ok(SessionEnd::InputClosed);
        }

        if !console.confirm(REPLAY_PROMPT)? {
            console.say(FAREWELL)?;
            return Ok(SessionEnd::Declined);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<&[u8]>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes()), Vec::new())
    }

    fn written(console: &Console<Cursor<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    /// The hand the opponent will draw next from `rng`.
    fn peek_opponent(rng: &GameRng) -> Choice {
        Choice::random(&mut rng.clone())
    }

    #[test]
    fn test_round_invalid_input_is_a_loss() {
        let mut rng = GameRng::new(5);
        let opponent = peek_opponent(&rng);
        let mut c = console("banana\n");

        let result = play_round(&mut rng, &mut c).unwrap();

        assert_eq!(result, Some(RoundResult::Loss));
        assert!(written(&c).ends_with(&format!("{opponent} beats Invalid. You lose!\n")));
    }

    #[test]
    fn test_round_matching_hand_is_a_draw() {
        let mut rng = GameRng::new(11);
        let opponent = peek_opponent(&rng);
        let answer = format!("{}\n", &opponent.to_string()[..1]);
        let mut c = console(&answer);

        let result = play_round(&mut rng, &mut c).unwrap();

        assert_eq!(result, Some(RoundResult::Tie));
        assert_eq!(written(&c), format!("{CHOICE_PROMPT} {DRAW}\n"));
    }

    #[test]
    fn test_round_closed_input() {
        let mut rng = GameRng::new(1);
        let mut c = console("");

        assert_eq!(play_round(&mut rng, &mut c).unwrap(), None);
    }

    #[test]
    fn test_run_rejects_even_rounds() {
        let config = MatchConfig::new().with_rounds(2);
        let mut c = console("r\n");

        assert!(run(&config, &mut GameRng::new(1), &mut c).is_err());
        assert!(c.output().is_empty());
    }
}
