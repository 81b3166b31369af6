//! Escalation through a seat's three piles.
//!
//! A seat plays from its hand while it has one, then from reserve A, then
//! blind from reserve B. Nothing is transferred when a pile empties; the
//! active pile is recomputed from emptiness on every turn.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::player::Player;

/// Which of a seat's piles a play comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileSource {
    Hand,
    /// Face-up reserve ("Last Chance").
    ReserveA,
    /// Face-down reserve ("Last Stand").
    ReserveB,
}

impl PileSource {
    /// Reserve B is played blind and revealed only on commit.
    #[must_use]
    pub const fn is_blind(self) -> bool {
        matches!(self, PileSource::ReserveB)
    }
}

impl std::fmt::Display for PileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PileSource::Hand => "hand",
            PileSource::ReserveA => "reserve A",
            PileSource::ReserveB => "reserve B",
        };
        f.write_str(label)
    }
}

/// The pile this seat must play from now.
#[must_use]
pub fn active_source(player: &Player) -> PileSource {
    if !player.hand().is_empty() {
        PileSource::Hand
    } else if !player.reserve_a().is_empty() {
        PileSource::ReserveA
    } else {
        PileSource::ReserveB
    }
}

/// Where a proposed group is sourced from.
///
/// Hand wins if any card is in the hand, then reserve A; anything else is
/// treated as reserve B.
#[must_use]
pub fn source_of(player: &Player, cards: &[Card]) -> PileSource {
    if cards.iter().any(|c| player.hand().contains(c)) {
        PileSource::Hand
    } else if cards.iter().any(|c| player.reserve_a().contains(c)) {
        PileSource::ReserveA
    } else {
        PileSource::ReserveB
    }
}
