//! State transitions.
//!
//! This is the only module that mutates a `GameState`:
//! - setup: dealing, reshuffling, swapping and renaming
//! - play: the opening play-off, plays, reserve B reveals, eating and AI turns
//! - construction of new or arranged games
//! - statistics
//!
//! `Quatch` exposes the play stage through the `RulesEngine` trait.

pub mod builder;
mod engine;
mod play;
mod setup;
pub mod summary;

pub use builder::{GameBuilder, SeatLayout, TableLayout};
pub use engine::Quatch;
pub use summary::{format_elapsed, GameSummary, PlayerSummary};

use crate::core::config::GameConfig;
use crate::core::state::GameState;

/// Start a new game in SETUP with the given seat names.
///
/// Blank names fall back to the defaults. Seat 1 is AI-controlled.
#[must_use]
pub fn initialize_game(first: &str, second: &str) -> GameState {
    GameState::new(GameConfig::new().with_names(first, second))
}
