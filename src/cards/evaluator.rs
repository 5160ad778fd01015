use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A lazy evaluator for a hand's strength.
///
/// Using the compact bitmask representation of the Hand, we probe for the
/// best Ranking with bitwise operations, best category first, returning on
/// the first match. Flush and straight presence are established
/// independently over the whole hand; a hand holding both promotes to a
/// straight flush (Ace-high: royal flush).
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        let ranking = self.find_ranking();
        let kickers = self.find_kickers(ranking);
        Strength::from((ranking, kickers))
    }

    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.straight_flush())
            .or_else(|| self.quads())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.trips())
            .or_else(|| self.pairs())
            .or_else(|| self.high_card())
            .expect("at least one card in Hand")
    }

    pub fn find_kickers(&self, value: Ranking) -> Kickers {
        match value.n_kickers() {
            0 => Kickers::NONE,
            n => {
                // flush kickers come from the flush suit only
                let eligible = match value {
                    Ranking::Flush(_) => self
                        .flush_suit()
                        .map(|suit| u16::from(self.0.of(&suit)))
                        .unwrap_or_default(),
                    _ => u16::from(self.0),
                };
                let mut kicks = eligible & value.mask();
                while kicks.count_ones() as usize > n {
                    kicks &= kicks - 1; // shed the lowest until n remain
                }
                Kickers::from(kicks)
            }
        }
    }

    fn high_card(&self) -> Option<Ranking> {
        self.n_of_a_kind(1, None).map(Ranking::HighCard)
    }
    fn pairs(&self) -> Option<Ranking> {
        self.n_of_a_kind(2, None)
            .map(|hi| match self.n_of_a_kind(2, Some(hi)) {
                Some(lo) => Ranking::TwoPair(hi, lo),
                None => Ranking::OnePair(hi),
            })
    }
    fn trips(&self) -> Option<Ranking> {
        self.n_of_a_kind(3, None).map(Ranking::ThreeOAK)
    }
    fn quads(&self) -> Option<Ranking> {
        self.n_of_a_kind(4, None).map(Ranking::FourOAK)
    }
    fn full_house(&self) -> Option<Ranking> {
        self.n_of_a_kind(3, None).and_then(|triple| {
            self.n_of_a_kind(2, Some(triple))
                .map(|pair| Ranking::FullHouse(triple, pair))
        })
    }
    fn straight(&self) -> Option<Ranking> {
        self.straight_high().map(Ranking::Straight)
    }
    fn flush(&self) -> Option<Ranking> {
        self.flush_suit()
            .map(|suit| Ranking::Flush(Rank::from(u16::from(self.0.of(&suit)))))
    }
    fn straight_flush(&self) -> Option<Ranking> {
        self.flush_suit()
            .and_then(|_| self.straight_high())
            .map(|rank| match rank {
                Rank::Ace => Ranking::RoyalFlush,
                rank => Ranking::StraightFlush(rank),
            })
    }

    /// highest rank ending a five-long run, with the wheel as a special case
    fn straight_high(&self) -> Option<Rank> {
        let ranks = u16::from(self.0);
        let mut runs = ranks;
        for _ in 0..4 {
            runs &= runs << 1;
        }
        match runs {
            0 if WHEEL & ranks == WHEEL => Some(LOWEST_STRAIGHT_RANK),
            0 => None,
            bits => Some(Rank::from(bits)),
        }
    }
    fn flush_suit(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    /// highest rank, other than skip, held in at least n suits
    fn n_of_a_kind(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        (0u8..13)
            .rev()
            .map(Rank::from)
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| (u64::from(self.0) & u64::from(*rank)).count_ones() as usize >= n)
    }
}
