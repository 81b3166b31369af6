//! Core engine types: seats, state, actions, RNG, configuration.
//!
//! Everything here is plain data plus reads. The transitions that change a
//! `GameState` live in `crate::game`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{Difficulty, GameConfig, DEAL_SIZE, HAND_TARGET, PLAYER_COUNT};
pub use action::{Action, ActionRecord, CardGroup};
pub use state::GameState;
