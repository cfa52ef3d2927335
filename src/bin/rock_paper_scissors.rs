//! Rock Paper Scissors
//!
//! Best of three against a random opponent, with rematches.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use parlor_games::games::rps;
use parlor_games::{Console, GameRng, MatchConfig};

#[derive(Parser)]
#[command(name = "rock-paper-scissors")]
#[command(version, about = "Best-of-three Rock Paper Scissors", long_about = None)]
struct Cli {
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the seed in use to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    if cli.verbose {
        eprintln!("seed: {}", rng.seed());
    }

    let mut console = Console::stdio();
    let end = rps::run(&MatchConfig::default(), &mut rng, &mut console)
        .context("rock paper scissors failed")?;

    Ok(end.into())
}
