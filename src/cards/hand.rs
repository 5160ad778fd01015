use super::card::Card;
use super::suit::Suit;

/// An unordered set of cards packed into the low 52 bits of a u64.
///
/// One bit per distinct card, so membership, union, and removal are single
/// bitwise operations and no hand ever touches the heap.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    /// union of two disjoint hands
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// the subset of cards in the given suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// clearing an absent bit is a no-op, so removal is idempotent
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// draining iteration, lowest card first
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            n => {
                let card = Card::from(n.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
}

/// u64 isomorphism, masking off the 12 unused high bits
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards
            .into_iter()
            .fold(Self::empty(), |h, c| Self(h.0 | u64::from(c)))
    }
}

/// collapse the hand to a 13-bit rank presence mask,
/// forgetting suits and multiplicity
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        (0..13)
            .filter(|rank| h.0 >> (rank * 4) & 0xF != 0)
            .fold(0u16, |mask, rank| mask | 1 << rank)
    }
}

/// str isomorphism
/// this follows from Card::parse, rejecting duplicate tokens
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let n = cards.len();
        let hand = Self::from(cards);
        match hand.size() {
            m if m == n => Ok(hand),
            _ => Err(format!("duplicate cards: {}", s)),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self(rand::random::<u64>() & Self::mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration_is_sorted() {
        let mut iter = Hand::try_from("Qd 3h Ac 3s").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("3h").ok());
        assert_eq!(iter.next(), Card::try_from("3s").ok());
        assert_eq!(iter.next(), Card::try_from("Qd").ok());
        assert_eq!(iter.next(), Card::try_from("Ac").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::Club)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of(&Suit::Diamond)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of(&Suit::Heart)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of(&Suit::Spade)), 0b_0100010001000);
    }

    #[test]
    fn idempotent_removal() {
        let mut hand = Hand::try_from("As Kh").unwrap();
        let gone = Card::try_from("2c").unwrap();
        hand.remove(gone);
        assert_eq!(hand, Hand::try_from("As Kh").unwrap());
        let king = Card::try_from("Kh").unwrap();
        hand.remove(king);
        hand.remove(king);
        assert_eq!(hand, Hand::try_from("As").unwrap());
    }

    #[test]
    fn duplicate_tokens_rejected() {
        assert!(Hand::try_from("As As").is_err());
    }
}
