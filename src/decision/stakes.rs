use super::action::Action;
use crate::{BLUFF_EQUITY, BLUFF_PASSIVITY, BLUFF_RATE};
use crate::{CALL_BASE, CALL_SLOPE, RAISE_BASE, RAISE_SLOPE};
use crate::{Chips, Probability};
use anyhow::Result;
use anyhow::ensure;
use rand::Rng;

/// Everything the decision heuristic looks at: estimated equity, the money
/// already in the middle, the bet hero is facing, and how aggressive the
/// rival plays (0 passive, 1 maniac).
///
/// The mapping to an [`Action`] is pure except for the bluff branch, whose
/// random draw comes from the injected RNG.
#[derive(Debug, Clone, Copy)]
pub struct Stakes {
    equity: Probability,
    pot: Chips,
    bet: Chips,
    aggression: Probability,
}

impl Stakes {
    pub fn new(
        equity: Probability,
        pot: Chips,
        bet: Chips,
        aggression: Probability,
    ) -> Result<Self> {
        ensure!((0.0..=1.0).contains(&equity), "equity must be in [0, 1]");
        ensure!(pot >= 0.0, "pot must be non-negative");
        ensure!(bet >= 0.0, "bet must be non-negative");
        ensure!(
            (0.0..=1.0).contains(&aggression),
            "aggression must be in [0, 1]"
        );
        Ok(Self {
            equity,
            pot,
            bet,
            aggression,
        })
    }

    /// Share of the after-call pot hero is asked to pay. A non-bet carries
    /// no incentive to call, so an empty pot and bet count as 1.
    pub fn pot_odds(&self) -> Probability {
        match self.pot + self.bet {
            total if total == 0.0 => 1.0,
            total => self.bet / total,
        }
    }

    /// equity above which hero raises for value
    fn raise_threshold(&self) -> Probability {
        RAISE_BASE + RAISE_SLOPE * self.aggression
    }
    /// equity below which a pot-odds call is still declined
    fn call_threshold(&self) -> Probability {
        CALL_BASE - CALL_SLOPE * (1.0 - self.aggression)
    }

    /// First matching rule wins: an occasional bluff against passive rivals
    /// holding nothing, a value raise, a pot-odds call strong enough to
    /// commit, otherwise a fold.
    pub fn choose(&self, rng: &mut impl Rng) -> Action {
        if self.equity < BLUFF_EQUITY
            && self.aggression < BLUFF_PASSIVITY
            && rng.random::<Probability>() < BLUFF_RATE
        {
            return Action::BluffRaise;
        }
        if self.equity > self.raise_threshold() {
            Action::Raise
        } else if self.equity > self.pot_odds() {
            if self.equity > self.call_threshold() {
                Action::Call
            } else {
                Action::Fold
            }
        } else {
            Action::Fold
        }
    }

    /// [`Self::choose`] over the thread RNG.
    pub fn decide(&self) -> Action {
        self.choose(&mut rand::rng())
    }
}
