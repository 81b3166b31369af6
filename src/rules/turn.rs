//! Turn sequencing and stage progression.
//!
//! Stages run strictly forward: SETUP → SWAP → PLAY → GAME_OVER. Within
//! PLAY the turn passes `(current + direction) mod seats`, except that a
//! clear keeps the turn and a win ends the game.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Game stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Deck built, cards being dealt.
    Setup,
    /// Seats may exchange hand and reserve A cards.
    Swap,
    /// Turns are being played.
    Play,
    /// A seat has emptied all three piles.
    GameOver,
}

impl Stage {
    /// The stage that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Stage> {
        match self {
            Stage::Setup => Some(Stage::Swap),
            Stage::Swap => Some(Stage::Play),
            Stage::Play => Some(Stage::GameOver),
            Stage::GameOver => None,
        }
    }
}

/// The three paired deals of setup, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealStep {
    ReserveB,
    ReserveA,
    Hand,
}

impl DealStep {
    /// Following deal, `None` after the hand.
    #[must_use]
    pub const fn next(self) -> Option<DealStep> {
        match self {
            DealStep::ReserveB => Some(DealStep::ReserveA),
            DealStep::ReserveA => Some(DealStep::Hand),
            DealStep::Hand => None,
        }
    }
}

/// Direction of play around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    /// +1 or −1.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            TurnDirection::Clockwise => 1,
            TurnDirection::CounterClockwise => -1,
        }
    }
}

/// Who acts after a resolved action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAdvance {
    /// The same seat goes again (the pile was cleared).
    Replay(PlayerId),
    /// The turn passes.
    Next(PlayerId),
    /// The acting seat won.
    GameOver { winner: PlayerId },
}

impl TurnAdvance {
    /// Seat to act next, `None` once the game is over.
    #[must_use]
    pub fn next_player(self) -> Option<PlayerId> {
        match self {
            TurnAdvance::Replay(p) | TurnAdvance::Next(p) => Some(p),
            TurnAdvance::GameOver { .. } => None,
        }
    }
}

/// Seat after `current` in `direction`.
#[must_use]
pub fn next_player(current: PlayerId, direction: TurnDirection, player_count: usize) -> PlayerId {
    let count = player_count as i32;
    let next = (current.index() as i32 + direction.step()).rem_euclid(count);
    PlayerId::new(next as u8)
}

/// Decide the advance after `current` acted.
///
/// A win supersedes a replay, which supersedes the normal pass.
#[must_use]
pub fn advance(
    current: PlayerId,
    direction: TurnDirection,
    player_count: usize,
    replay: bool,
    won: bool,
) -> TurnAdvance {
    if won {
        TurnAdvance::GameOver { winner: current }
    } else if replay {
        TurnAdvance::Replay(current)
    } else {
        TurnAdvance::Next(next_player(current, direction, player_count))
    }
}
