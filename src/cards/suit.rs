#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// all 13 cards of this suit in the 52-bit deck layout
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001111111111111 << u8::from(s)
    }
}

/// str isomorphism, case-insensitive on input
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "c" => Ok(Suit::Club),
            "d" => Ok(Suit::Diamond),
            "h" => Ok(Suit::Heart),
            "s" => Ok(Suit::Spade),
            _ => Err(format!("invalid suit: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::hand::Hand;
    use crate::cards::rank::Rank;

    #[test]
    fn bijective_u8() {
        let suit = Suit::Heart;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn suit_mask_selects_suit() {
        let card = Card::from((Rank::Ten, Suit::Spade));
        let hand = Hand::from(u64::from(card));
        assert!(u64::from(hand) & u64::from(Suit::Spade) != 0);
        assert!(u64::from(hand) & u64::from(Suit::Heart) == 0);
    }

    #[test]
    fn case_insensitive_str() {
        assert!(Suit::try_from("S") == Ok(Suit::Spade));
        assert!(Suit::try_from("x").is_err());
    }
}
