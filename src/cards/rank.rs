/// Card rank, Two lowest through Ace highest.
///
/// The discriminant doubles as a bit position: a rank occupies one of
/// 13 bits in a u16 mask, or one of 13 nibbles in a u64 hand mask.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];
    const GLYPHS: [char; 13] = [
        '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
    ];

    pub const fn mask() -> u16 {
        0b1111111111111
    }

    /// lowest Rank present in a u64 nibble-mask injection
    pub fn lo(n: u64) -> Self {
        Self::from((n.trailing_zeros() / 4) as u8)
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        Self::ALL[usize::from(n)]
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism
///
/// With 13 ranks we only need 13 bits. From<u16> takes the
/// highest rank present in the mask.
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        let msb = (16 - 1 - (n & Self::mask()).leading_zeros()) as u8;
        Rank::from(msb)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// u64 injection
/// all four card slots of this rank
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (u8::from(r) * 4)
    }
}

/// str isomorphism, case-insensitive on input
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .next()
            .filter(|_| s.chars().count() == 1)
            .map(|c| c.to_ascii_uppercase())
            .and_then(|c| Self::GLYPHS.iter().position(|g| *g == c))
            .map(|i| Self::ALL[i])
            .ok_or_else(|| format!("invalid rank: {}", s))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Self::GLYPHS[*self as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        assert!(Rank::ALL.iter().all(|r| *r == Rank::from(u8::from(*r))));
    }

    #[test]
    fn bijective_u16() {
        assert!(Rank::ALL.iter().all(|r| *r == Rank::from(u16::from(*r))));
    }

    #[test]
    fn bijective_str() {
        assert!(Rank::ALL
            .iter()
            .all(|r| Ok(*r) == Rank::try_from(r.to_string().as_str())));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Rank::Five) == 0b1111000000000000);
    }

    #[test]
    fn case_insensitive_str() {
        assert!(Rank::try_from("t") == Ok(Rank::Ten));
        assert!(Rank::try_from("A") == Ok(Rank::Ace));
        assert!(Rank::try_from("1").is_err());
        assert!(Rank::try_from("10").is_err());
    }
}
