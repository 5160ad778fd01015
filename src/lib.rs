//! Monte Carlo equity estimation and pot-odds decision heuristics for
//! Texas Hold'em.
//!
//! The crate is split into three layers: `cards` holds the 52-card model and
//! the hand-strength evaluator, `simulation` estimates win probability by
//! sampling unknown rivals and board completions, and `decision` converts
//! that probability into a recommended table action.

pub mod cards;
pub mod decision;
pub mod simulation;

/// Win probabilities, equities, and threshold parameters.
pub type Probability = f32;
/// Pot and bet amounts in whatever currency the table plays.
pub type Chips = f32;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SIMULATION PARAMETERS
// ============================================================================
/// Trials per equity call when the caller does not specify.
pub const DEFAULT_TRIALS: usize = 5_000;
/// Hard cap on trials per call. Requests above this are clamped.
pub const MAX_TRIALS: usize = 1_000_000;
/// Trials per sub-seeded batch. Reproducibility is keyed to batch index,
/// not worker identity, so results are stable at any thread count.
pub const TRIAL_BATCH: usize = 1_024;

// ============================================================================
// DECISION THRESHOLDS
// Raise above 0.6..0.75 depending on rival aggression; call above pot odds
// only when equity also clears 0.3..0.4.
// ============================================================================
/// Raise threshold at zero aggression.
pub const RAISE_BASE: Probability = 0.6;
/// Raise threshold growth per unit of aggression.
pub const RAISE_SLOPE: Probability = 0.15;
/// Call threshold at full aggression.
pub const CALL_BASE: Probability = 0.4;
/// Call threshold discount per unit of passivity.
pub const CALL_SLOPE: Probability = 0.1;
/// Chance of raising as a bluff when the spot qualifies.
pub const BLUFF_RATE: Probability = 0.1;
/// Bluffs only fire below this equity.
pub const BLUFF_EQUITY: Probability = 0.2;
/// Bluffs only fire against rivals less aggressive than this.
pub const BLUFF_PASSIVITY: Probability = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO, without source locations.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
