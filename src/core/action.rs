//! Action representation.
//!
//! A turn in the play stage is exactly one of:
//! - "Play" a same-rank group from the hand or reserve A
//! - "Reveal" a reserve B card by position (blind phase)
//! - "Eat" the whole pile

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Card;

/// A group of same-rank cards. At most four share a rank, so it never spills.
pub type CardGroup = SmallVec<[Card; 4]>;

/// A complete play-stage action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play these cards from the active pile.
    Play(CardGroup),
    /// Turn over the reserve B card at this position.
    Reveal(usize),
    /// Pick up the pile.
    Eat,
}

impl Action {
    /// Build a play action from a slice.
    #[must_use]
    pub fn play(cards: &[Card]) -> Self {
        Action::Play(SmallVec::from_slice(cards))
    }

    /// Cards named by a play, empty for other actions.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Action::Play(cards) => cards,
            Action::Reveal(_) | Action::Eat => &[],
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn count when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
