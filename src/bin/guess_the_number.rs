//! Guess the number
//!
//! Find the secret number between the bounds; every guess is answered with
//! "Too low!", "Too high!" or "Correct!".

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use parlor_games::games::guess;
use parlor_games::{Console, GameRng, GuessConfig};

#[derive(Parser)]
#[command(name = "guess-the-number")]
#[command(version, about = "Guess the secret number", long_about = None)]
struct Cli {
    /// Smallest possible number
    #[arg(long, default_value_t = GuessConfig::DEFAULT_MIN, allow_negative_numbers = true)]
    min: i64,

    /// Largest possible number
    #[arg(long, default_value_t = GuessConfig::DEFAULT_MAX, allow_negative_numbers = true)]
    max: i64,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the seed in use to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Bounds from the flags, rejected when `--min` exceeds `--max`.
    fn config(&self) -> parlor_games::Result<GuessConfig> {
        let config = GuessConfig::new().with_bounds(self.min, self.max);
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = cli.config().context("invalid --min/--max")?;

    let mut rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    if cli.verbose {
        eprintln!("seed: {}", rng.seed());
    }

    let mut console = Console::stdio();
    let end = guess::run(&config, &mut rng, &mut console).context("guessing game failed")?;

    Ok(end.into())
}
