//! Console blackjack against the dealer.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use shoe21::{Console, TableOptions};

/// Play a few hands of blackjack against the dealer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of decks in the shoe.
    #[arg(long, default_value_t = TableOptions::default().decks)]
    decks: u8,
    /// Number of hands to play.
    #[arg(long, default_value_t = TableOptions::default().rounds)]
    rounds: u32,
    /// Starting chip balance.
    #[arg(long, default_value_t = TableOptions::default().starting_chips)]
    chips: usize,
    /// Seed for the shuffle; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = TableOptions::default()
        .with_decks(args.decks)
        .with_rounds(args.rounds)
        .with_starting_chips(args.chips);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::info!(seed, ?options, "starting game");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let state = console
        .play(&options, &mut rng)
        .context("game ended early")?;

    tracing::info!(chips = state.chips, "finished");
    Ok(())
}
