use crate::Probability;

/// Win/tie accumulator over one equity estimation call.
///
/// Trials run in sub-seeded batches; each batch accumulates its own Outcome
/// and the partials are absorbed into one total at the end, so no counter is
/// shared between workers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    wins: usize,
    ties: usize,
    trials: usize,
}

impl Outcome {
    /// Hero beat every rival outright.
    pub fn win(&mut self) {
        self.wins += 1;
        self.trials += 1;
    }
    /// Hero beat or matched every rival, matching at least one.
    pub fn tie(&mut self) {
        self.ties += 1;
        self.trials += 1;
    }
    /// Some rival beat hero.
    pub fn loss(&mut self) {
        self.trials += 1;
    }

    /// Merge two partial outcomes.
    pub fn absorb(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            trials: self.trials + rhs.trials,
        }
    }

    /// Equity estimate with each tied pot approximated as an even
    /// `(rivals + 1)`-way split, however many rivals actually tied.
    pub fn probability(&self, rivals: usize) -> Probability {
        match self.trials {
            0 => 0.0,
            trials => {
                let wins = self.wins as Probability;
                let ties = self.ties as Probability;
                let split = (rivals + 1) as Probability;
                (wins + ties / split) / trials as Probability
            }
        }
    }
}
