use super::rank::Rank;

/// A poker hand's category, together with the ranks that define it.
///
/// Declaration order is ranking order, so the derived Ord makes category
/// dominate and the defining ranks break ties first. Kicker cards finish
/// the comparison in [`Strength`](super::strength::Strength).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, the lower flush ranks
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
    RoyalFlush,            // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            Ranking::Flush(_) => 4,
            _ => 0,
        }
    }

    /// rank-mask of cards still eligible as kickers
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..)
            | Ranking::StraightFlush(..)
            | Ranking::Straight(..)
            | Ranking::RoyalFlush => unreachable!(),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "High Card, {} high", r),
            Ranking::OnePair(r) => write!(f, "Pair of {}s", r),
            Ranking::TwoPair(hi, lo) => write!(f, "Two Pair, {}s and {}s", hi, lo),
            Ranking::ThreeOAK(r) => write!(f, "Three of a Kind, {}s", r),
            Ranking::Straight(r) => write!(f, "Straight to the {}", r),
            Ranking::Flush(r) => write!(f, "Flush, {} high", r),
            Ranking::FullHouse(t, p) => write!(f, "Full House, {}s over {}s", t, p),
            Ranking::FourOAK(r) => write!(f, "Four of a Kind, {}s", r),
            Ranking::StraightFlush(r) => write!(f, "Straight Flush to the {}", r),
            Ranking::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}
