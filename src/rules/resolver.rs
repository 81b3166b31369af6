//! Pile resolution: placing a play on the main pile and clearing it.
//!
//! The pile clears into the bin when a Ten is played, or when its top four
//! cards share a rank. The four-of-a-kind check looks at the last four
//! slots of the pile regardless of how many cards the final play added, so
//! a pair played onto a pair clears.
//!
//! There is no stored "reset" flag: the pile is in reset exactly when its
//! top card is a Two.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Why the pile cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearKind {
    /// A Ten was played.
    Ten,
    /// The top four cards share a rank.
    FourOfAKind,
}

/// Result of placing a play on the pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileResolution {
    /// Set if the play cleared the pile.
    pub clear: Option<ClearKind>,
    /// Cards moved into the bin (0 if no clear).
    pub binned: usize,
}

impl PileResolution {
    /// A clear grants the acting seat another turn.
    #[must_use]
    pub fn is_replay(&self) -> bool {
        self.clear.is_some()
    }
}

/// Top card of the pile, the target of the next play.
#[must_use]
pub fn target(mpa: &[Card]) -> Option<Card> {
    mpa.last().copied()
}

/// The pile's top card is a Two, so the next play is unconstrained.
#[must_use]
pub fn is_reset(mpa: &[Card]) -> bool {
    matches!(target(mpa), Some(card) if card.rank == Rank::Two)
}

/// Would the pile clear, given it already holds the latest play on top?
#[must_use]
pub fn clear_trigger(mpa: &[Card]) -> Option<ClearKind> {
    let top = target(mpa)?;
    if top.rank == Rank::Ten {
        return Some(ClearKind::Ten);
    }
    if mpa.len() >= 4 && mpa[mpa.len() - 4..].iter().all(|c| c.rank == top.rank) {
        return Some(ClearKind::FourOfAKind);
    }
    None
}

/// How many matching cards are stacked on top: 3, 2, or 0.
///
/// Display only; derived from the pile's tail and never stored.
#[must_use]
pub fn combo_count(mpa: &[Card]) -> u8 {
    let len = mpa.len();
    if len < 2 {
        return 0;
    }
    let top = mpa[len - 1].rank;
    if len >= 3 && mpa[len - 2].rank == top && mpa[len - 3].rank == top {
        3
    } else if mpa[len - 2].rank == top {
        2
    } else {
        0
    }
}

/// Append `played` to the pile and clear it into `bin` if triggered.
pub fn resolve(mpa: &mut Vec<Card>, bin: &mut Vec<Card>, played: &[Card]) -> PileResolution {
    mpa.extend_from_slice(played);
    let clear = clear_trigger(mpa);
    let binned = if clear.is_some() {
        let count = mpa.len();
        bin.append(mpa);
        count
    } else {
        0
    };
    PileResolution { clear, binned }
}
