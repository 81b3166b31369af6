//! Rules engine trait.
//!
//! `RulesEngine` is the seat-agnostic surface used by drivers such as the
//! autoplay loop:
//! - What actions are legal
//! - How actions modify state
//! - Whether the game is over

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::RuleError;

use super::outcome::TurnOutcome;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Seat that emptied all three piles.
    pub winner: PlayerId,
    /// Turn passes taken before the win.
    pub turns: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the player can't act
/// - `apply_action`: Must leave the state untouched on error
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Legal play-stage actions for `player`.
    ///
    /// Plays are listed as rank groups taken in pile order; any other
    /// selection of the same rank and size is equally legal.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Commit an action.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<TurnOutcome, RuleError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Is `action` among the legal actions?
    fn is_legal(&self, state: &GameState, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(state, player).contains(action)
    }
}
