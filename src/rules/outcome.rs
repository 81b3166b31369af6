//! What a committed action did.
//!
//! Every successful play-stage commit returns a `TurnOutcome`: the acting
//! seat, what happened to the cards, and who acts next. Presentation layers
//! can animate from it without diffing snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::action::CardGroup;
use crate::core::player::PlayerId;

use super::escalation::PileSource;
use super::resolver::ClearKind;
use super::turn::TurnAdvance;

/// Card movement caused by one action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// Cards landed on the pile.
    Played {
        cards: CardGroup,
        source: PileSource,
        /// Set if the pile cleared into the bin.
        clear: Option<ClearKind>,
        /// Drawn from the deck afterwards, in draw order.
        drawn: Vec<Card>,
    },
    /// A revealed reserve B card could not be played. It went to the hand
    /// together with the pile.
    Busted { card: Card, picked_up: usize },
    /// The pile was picked up.
    Ate { picked_up: usize },
}

/// Result of a committed action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: PlayerId,
    pub event: TurnEvent,
    pub advance: TurnAdvance,
}

impl TurnOutcome {
    /// The action won the game.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self.advance, TurnAdvance::GameOver { .. })
    }

    /// The action cleared the pile.
    #[must_use]
    pub fn cleared(&self) -> Option<ClearKind> {
        match &self.event {
            TurnEvent::Played { clear, .. } => *clear,
            TurnEvent::Busted { .. } | TurnEvent::Ate { .. } => None,
        }
    }
}

/// Result of the opening play-off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningOutcome {
    /// Seat that won the play-off, `None` if both seats forfeited.
    pub leader: Option<PlayerId>,
    /// The leader's opening play, already applied.
    pub play: Option<TurnOutcome>,
}
