//! Tier strategies and the tier table.
//!
//! How to add a tier:
//! 1) Implement `Strategy` for a unit type in `tiers`.
//! 2) Add a `Tier` entry to the static table, in `Difficulty` order.
//! 3) Strategies pick from the candidates they are given and never invent
//!    a play, so anything they return is legal.

use crate::cards::{Card, Rank};
use crate::core::action::CardGroup;
use crate::core::config::Difficulty;

use super::tiers::{Easy, Extreme, Hard, Medium};

/// What a strategy can see besides its own cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Situation {
    pub target: Option<Card>,
    pub mpa_size: usize,
    pub deck_size: usize,
}

impl Situation {
    /// The pile is empty or topped by a Two.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.mpa_size == 0 || matches!(self.target, Some(t) if t.rank == Rank::Two)
    }

    /// Big pile, or a smaller one late in the deck.
    #[must_use]
    pub fn hard_pressure(&self) -> bool {
        self.mpa_size >= 5 || (self.deck_size <= 10 && self.mpa_size >= 3)
    }

    /// Lower thresholds used only by Extreme.
    #[must_use]
    pub fn extreme_pressure(&self) -> bool {
        self.mpa_size >= 3 || (self.deck_size <= 15 && self.mpa_size >= 2)
    }
}

/// Selection policy of one tier.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Pick one of `candidates`, all of which are legal.
    ///
    /// `None` only when `candidates` is empty.
    fn select(&self, candidates: &[CardGroup], situation: &Situation) -> Option<CardGroup>;
}

/// A tier table entry.
pub struct Tier {
    pub difficulty: Difficulty,
    pub strategy: &'static dyn Strategy,
}

static TIERS: &[Tier] = &[
    Tier {
        difficulty: Difficulty::Easy,
        strategy: &Easy,
    },
    Tier {
        difficulty: Difficulty::Medium,
        strategy: &Medium,
    },
    Tier {
        difficulty: Difficulty::Hard,
        strategy: &Hard,
    },
    Tier {
        difficulty: Difficulty::Extreme,
        strategy: &Extreme,
    },
];

/// The registered tiers, weakest first.
pub fn tiers() -> &'static [Tier] {
    TIERS
}

/// Strategy for a difficulty.
pub fn strategy_for(difficulty: Difficulty) -> &'static dyn Strategy {
    match TIERS.iter().find(|tier| tier.difficulty == difficulty) {
        Some(tier) => tier.strategy,
        None => &Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn situation(mpa_size: usize, deck_size: usize) -> Situation {
        Situation {
            target: Some(Card::new(Rank::Seven, Suit::Spades)),
            mpa_size,
            deck_size,
        }
    }

    #[test]
    fn test_every_difficulty_registered_in_order() {
        let order: Vec<Difficulty> = tiers().iter().map(|t| t.difficulty).collect();
        assert_eq!(order, Difficulty::ALL.to_vec());
        for difficulty in Difficulty::ALL {
            assert_eq!(strategy_for(difficulty).name(), difficulty.to_string());
        }
    }

    #[test]
    fn test_hard_pressure() {
        assert!(!situation(4, 30).hard_pressure());
        assert!(situation(5, 30).hard_pressure());
        assert!(situation(3, 10).hard_pressure());
        assert!(!situation(3, 11).hard_pressure());
    }

    #[test]
    fn test_extreme_pressure() {
        assert!(situation(3, 40).extreme_pressure());
        assert!(situation(2, 15).extreme_pressure());
        assert!(!situation(2, 16).extreme_pressure());
        assert!(!situation(1, 0).extreme_pressure());
    }

    #[test]
    fn test_open_pile() {
        assert!(situation(0, 30).is_open());
        assert!(!situation(1, 30).is_open());
        let reset = Situation {
            target: Some(Card::new(Rank::Two, Suit::Clubs)),
            mpa_size: 4,
            deck_size: 30,
        };
        assert!(reset.is_open());
    }
}
