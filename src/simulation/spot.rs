use super::outcome::Outcome;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;
use crate::{MAX_TRIALS, Probability, TRIAL_BATCH};
use anyhow::Result;
use anyhow::ensure;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// How a single simulated showdown resolved for hero.
enum Showdown {
    Win,
    Tie,
    Loss,
}

/// A hero's partial view of a hand: pocket cards, revealed board, and the
/// number of rivals still in. Equity is estimated by repeatedly completing
/// the unknown cards at random and counting showdowns.
///
/// Trials are independent, so they run batch-wise under rayon; batch `i`
/// draws from `SmallRng::seed_from_u64(seed + i)`, which makes a seeded call
/// reproducible at any thread count.
#[derive(Debug, Clone, Copy)]
pub struct Spot {
    pocket: Hole,
    public: Hand,
    rivals: usize,
}

impl Spot {
    pub fn new(pocket: Hole, public: Hand, rivals: usize) -> Result<Self> {
        ensure!(rivals >= 1, "at least one rival required");
        ensure!(public.size() <= 5, "at most 5 board cards");
        ensure!(
            u64::from(Hand::from(pocket)) & u64::from(public) == 0,
            "board must be disjoint from pocket"
        );
        Ok(Self {
            pocket,
            public,
            rivals,
        })
    }

    pub fn pocket(&self) -> Hole {
        self.pocket
    }
    pub fn public(&self) -> Hand {
        self.public
    }
    pub fn rivals(&self) -> usize {
        self.rivals
    }

    /// Estimated win probability over a fresh random trial sequence.
    pub fn equity(&self, trials: usize) -> Result<Probability> {
        self.equity_seeded(trials, rand::random())
    }

    /// Estimated win probability, fully determined by the seed.
    pub fn equity_seeded(&self, trials: usize, seed: u64) -> Result<Probability> {
        ensure!(trials >= 1, "at least one trial required");
        let trials = match trials {
            n if n > MAX_TRIALS => {
                log::warn!("clamping {} trials to {}", n, MAX_TRIALS);
                MAX_TRIALS
            }
            n => n,
        };
        if self.remaining().size() < self.needed() {
            // not enough cards to deal this many rivals: degrade, not error
            return Ok(0.0);
        }
        let batches = trials.div_ceil(TRIAL_BATCH);
        let outcome = (0..batches)
            .into_par_iter()
            .map(|i| (i, TRIAL_BATCH.min(trials - i * TRIAL_BATCH)))
            .map(|(i, n)| self.sample(n, SmallRng::seed_from_u64(seed.wrapping_add(i as u64))))
            .reduce(Outcome::default, Outcome::absorb);
        Ok(outcome.probability(self.rivals))
    }

    /// cards yet to be dealt in one trial
    fn needed(&self) -> usize {
        self.rivals * 2 + (5 - self.public.size())
    }

    /// the 52-card deck minus hero's pocket and the known board
    fn remaining(&self) -> Deck {
        let mut deck = Deck::new();
        for card in Hand::from(self.pocket) {
            deck.remove(card);
        }
        for card in self.public {
            deck.remove(card);
        }
        deck
    }

    /// one batch of trials on its own RNG and its own copy of the deck
    fn sample(&self, trials: usize, mut rng: SmallRng) -> Outcome {
        let mut outcome = Outcome::default();
        for _ in 0..trials {
            match self.showdown(&mut rng) {
                Showdown::Win => outcome.win(),
                Showdown::Tie => outcome.tie(),
                Showdown::Loss => outcome.loss(),
            }
        }
        outcome
    }

    /// deal rival pockets and the board completion without replacement,
    /// then compare hero's strength against every rival's
    fn showdown(&self, rng: &mut impl Rng) -> Showdown {
        let mut deck = self.remaining();
        let pockets = (0..self.rivals)
            .map(|_| deck.deal(2, rng))
            .collect::<Vec<Hand>>();
        let public = Hand::add(self.public, deck.deal(5 - self.public.size(), rng));
        let hero = Strength::from(Hand::add(Hand::from(self.pocket), public));
        let mut tie = false;
        for pocket in pockets {
            let rival = Strength::from(Hand::add(pocket, public));
            if rival > hero {
                return Showdown::Loss;
            }
            if rival == hero {
                tie = true;
            }
        }
        match tie {
            true => Showdown::Tie,
            false => Showdown::Win,
        }
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.pocket, self.public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(pocket: &str, public: &str, rivals: usize) -> Spot {
        Spot::new(
            Hole::try_from(pocket).unwrap(),
            Hand::try_from(public).unwrap(),
            rivals,
        )
        .unwrap()
    }

    #[test]
    fn rejects_bad_arguments() {
        let pocket = Hole::try_from("As Kh").unwrap();
        assert!(Spot::new(pocket, Hand::empty(), 0).is_err());
        assert!(Spot::new(pocket, Hand::try_from("2c 3c 4c 5c 6c 7c").unwrap(), 1).is_err());
        assert!(Spot::new(pocket, Hand::try_from("As 2c").unwrap(), 1).is_err());
    }

    #[test]
    fn rejects_zero_trials() {
        assert!(spot("As Kh", "", 1).equity_seeded(0, 0).is_err());
    }

    #[test]
    fn probability_is_bounded() {
        let equity = spot("2c 7d", "", 3).equity_seeded(2_000, 7).unwrap();
        assert!((0.0..=1.0).contains(&equity));
    }

    #[test]
    fn seeded_runs_reproduce() {
        let spot = spot("Qs Jh", "2c 7d Th", 2);
        let a = spot.equity_seeded(5_000, 42).unwrap();
        let b = spot.equity_seeded(5_000, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pocket_aces_favored_heads_up() {
        let equity = spot("As Ah", "", 1).equity_seeded(20_000, 0).unwrap();
        assert!(equity > 0.5, "equity={}", equity);
    }

    #[test]
    fn royal_flush_wins_every_trial() {
        // hero holds the royal flush; no rival holding can beat or tie it,
        // so every sampled showdown is a win
        let equity = spot("As Ks", "Qs Js Ts 2d 7h", 1)
            .equity_seeded(5_000, 3)
            .unwrap();
        assert_eq!(equity, 1.0);
    }

    #[test]
    fn deck_exhaustion_degrades_to_zero() {
        // 23 rivals plus 2 board cards want 48 of the 47 remaining
        let equity = spot("As Kh", "2c 7d Th", 23).equity_seeded(100, 0).unwrap();
        assert_eq!(equity, 0.0);
        let equity = spot("As Kh", "2c 7d Th", 22).equity_seeded(2_000, 0).unwrap();
        assert!(equity > 0.0);
    }
}
