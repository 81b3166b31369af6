//! Rejected operations.
//!
//! Every variant describes an operation that was refused with the game
//! state left untouched. None of them are system failures.

use thiserror::Error;

use crate::cards::{describe, Card};
use crate::core::player::PlayerId;
use crate::rules::turn::Stage;

fn describe_target(target: &Option<Card>) -> String {
    target.map_or_else(|| "empty pile".to_string(), |c| c.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("illegal play: [{}] onto {}", describe(.cards), describe_target(.target))]
    IllegalPlay {
        cards: Vec<Card>,
        target: Option<Card>,
    },

    #[error("{player} cannot eat while a legal play exists")]
    IllegalEat { player: PlayerId },

    #[error("not allowed during the {stage:?} stage")]
    WrongStage { stage: Stage },

    #[error("the game is over")]
    GameOver,

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("{player} does not hold {card} in the active pile")]
    CardNotHeld { player: PlayerId, card: Card },

    #[error("cards must come from a single pile")]
    MixedSources,

    #[error("{player} is playing blind and must reveal a reserve B card")]
    BlindPhase { player: PlayerId },

    #[error("{player} still has cards in hand or reserve A")]
    NotBlindPhase { player: PlayerId },

    #[error("reserve B position {index} out of range (holds {len})")]
    ReserveIndex { index: usize, len: usize },

    #[error("the opening play may not use a Two or Ten")]
    SpecialOpening,

    #[error("the opening play-off has not been resolved")]
    OpeningPending,

    #[error("there is no opening play-off to resolve")]
    NoOpeningPending,

    #[error("swap needs one hand card and one reserve A card: {hand} / {reserve}")]
    InvalidSwap { hand: Card, reserve: Card },

    #[error("card {card} appears more than once")]
    DuplicateCard { card: Card },

    #[error("only one Two and one Ten exist; found extra {card}")]
    ExtraSpecial { card: Card },
}
