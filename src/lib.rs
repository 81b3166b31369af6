//! # quatch
//!
//! Rules engine, turn sequencer and AI opponents for Quatch, a two-player
//! shedding game played on a climbing pile.
//!
//! ## The game
//!
//! Each seat holds a hand, a face-up reserve A ("Last Chance") and a
//! face-down reserve B ("Last Stand"). Seats take turns playing same-rank
//! groups onto the main pile at or above the top card's value. A Two resets
//! the pile, a Ten or four of a kind clears it into the bin and grants
//! another turn. A seat that cannot play eats the pile. The first seat to
//! empty all three piles wins, but never with a Two or Ten.
//!
//! ## Design Principles
//!
//! 1. **One mutation surface**: a `GameState` changes only through the
//!    entry points in `game`. Every rule lives in `rules` as a pure function.
//!
//! 2. **Validate, then commit**: rejected operations return a `RuleError`
//!    and leave the state untouched.
//!
//! 3. **Derived, not stored**: the target card, reset state and combo count
//!    are read from the pile, never cached.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration
//! - `cards`: Suits, ranks, the 46-card deck
//! - `rules`: Legality, pile resolution, escalation, refill, turn order
//! - `game`: State transitions, builder, statistics
//! - `ai`: Candidate enumeration and the four tier strategies
//! - `error`: `RuleError`
//!
//! ```
//! use quatch::{ai, GameConfig, GameState, Difficulty};
//!
//! let config = GameConfig::new().all_ai().with_difficulty(Difficulty::Hard).with_seed(1);
//! let mut state = GameState::new(config);
//! let result = ai::play_out(&mut state, 10_000).unwrap();
//! assert_eq!(state.all_cards().count(), quatch::cards::DECK_SIZE);
//! # let _ = result;
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod ai;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CardGroup, Difficulty, GameConfig, GameRng, GameState, Player,
    PlayerId, PlayerMap,
};

pub use crate::cards::{Card, Rank, Suit};

pub use crate::rules::{
    ClearKind, GameResult, OpeningOutcome, PileSource, RulesEngine, Stage, TurnAdvance,
    TurnEvent, TurnOutcome,
};

pub use crate::game::{initialize_game, GameBuilder, GameSummary, Quatch, SeatLayout, TableLayout};

pub use crate::error::RuleError;
