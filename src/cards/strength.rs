use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// A hand's evaluated strength: its [`Ranking`] plus kicker cards.
///
/// This is the single totally ordered value that classification produces.
/// Category dominates, then the ranking's defining ranks, then kickers,
/// compared lexicographically by the derived Ord.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    /// Sentinel for hands of fewer than 5 cards. Strictly below every
    /// genuine hand: no real 5-card hand bottoms out at a bare deuce.
    pub const MIN: Self = Self {
        value: Ranking::HighCard(Rank::Two),
        kicks: Kickers::NONE,
    };

    pub fn value(&self) -> Ranking {
        self.value
    }
    pub fn kicks(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        match hand.size() {
            n if n < 5 => Self::MIN,
            _ => Self::from(Evaluator::from(hand)),
        }
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        evaluator.strength()
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}
