//! Card primitives and hand strength evaluation.
//!
//! Everything in here is built on a single packed representation: a card
//! occupies one of 52 bit positions in a u64, ordered by rank then suit.

pub mod card;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod hole;
pub mod kicks;
pub mod rank;
pub mod ranking;
pub mod strength;
pub mod suit;

pub use card::Card;
pub use deck::Deck;
pub use evaluator::Evaluator;
pub use hand::Hand;
pub use hole::Hole;
pub use kicks::Kickers;
pub use rank::Rank;
pub use ranking::Ranking;
pub use strength::Strength;
pub use suit::Suit;
