use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// A mutable deck of cards supporting random draws.
///
/// Wraps a [`Hand`] of the remaining cards. A fresh deck holds all 52 cards
/// in the stable bit order; a reduced deck is built by removing the known
/// cards before sampling. Draws take the RNG as a parameter so simulations
/// can run on seeded generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// Number of cards remaining.
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes a specific card. No-op if the card is already gone.
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// Draws and removes a uniformly random card from the deck.
    ///
    /// Picks an index uniformly over the remaining cards, then walks to the
    /// i-th set bit by clearing i lower bits before reading.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.0.size() > 0);
        let i = rng.random_range(0..self.0.size());
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.remove(card);
        card
    }

    /// Deals n random cards as a Hand.
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }

    /// Deals two random cards as a player's hole cards.
    pub fn hole(&mut self, rng: &mut impl Rng) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
