use anyhow::Result;
use clap::Parser;
use oddsmith::cards::hand::Hand;
use oddsmith::cards::hole::Hole;
use oddsmith::decision::stakes::Stakes;
use oddsmith::simulation::spot::Spot;

/// Estimate a Hold'em spot's win probability and recommend an action.
///
/// Cards are two-character tokens, rank then suit: "As" is the ace of
/// spades, "Tc" the ten of clubs.
#[derive(Parser)]
#[command(name = "oddsmith", version, about)]
struct Args {
    /// Hero's two hole cards, e.g. "As Kh"
    #[arg(long)]
    pocket: String,
    /// Community cards already revealed, 0 to 5
    #[arg(long, default_value = "")]
    board: String,
    /// Number of rivals still in the hand
    #[arg(long, default_value_t = 1)]
    rivals: usize,
    /// Current pot size
    #[arg(long, default_value_t = 0.0)]
    pot: f32,
    /// Bet hero is facing
    #[arg(long, default_value_t = 0.0)]
    bet: f32,
    /// Rival aggressiveness, 0 (passive) to 1 (maniac)
    #[arg(long, default_value_t = 0.5)]
    aggression: f32,
    /// Monte Carlo trials
    #[arg(long, default_value_t = oddsmith::DEFAULT_TRIALS)]
    trials: usize,
    /// Fix the trial sequence for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    oddsmith::log();
    let args = Args::parse();
    let pocket = Hole::try_from(args.pocket.as_str()).map_err(anyhow::Error::msg)?;
    let public = Hand::try_from(args.board.as_str()).map_err(anyhow::Error::msg)?;
    let spot = Spot::new(pocket, public, args.rivals)?;
    log::info!(
        "simulating {} against {} rival(s) over {} trials",
        spot,
        spot.rivals(),
        args.trials
    );
    let equity = match args.seed {
        Some(seed) => spot.equity_seeded(args.trials, seed)?,
        None => spot.equity(args.trials)?,
    };
    let stakes = Stakes::new(equity, args.pot, args.bet, args.aggression)?;
    println!("win probability  {:>6.1}%", equity * 100.0);
    println!("recommendation   {}", stakes.decide());
    Ok(())
}
