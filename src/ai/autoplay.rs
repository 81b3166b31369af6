//! Drive a whole game with the AI playing every seat.

use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::RuleError;
use crate::game::Quatch;
use crate::rules::engine::{GameResult, RulesEngine};
use crate::rules::turn::Stage;

use super::opening::get_ai_starting_card;

/// Play `state` to the end, or until `max_actions` play-stage actions.
///
/// Finishes setup, skips swapping, and resolves the play-off with each
/// seat's AI opening choice. Returns `None` if the cap was hit first.
pub fn play_out(state: &mut GameState, max_actions: u32) -> Result<Option<GameResult>, RuleError> {
    if state.stage() == Stage::Setup {
        state.deal_all()?;
    }
    if state.stage() == Stage::Swap {
        state.start_play()?;
    }
    if state.opening_pending() {
        let players = state.players();
        let first = get_ai_starting_card(&players[PlayerId::new(0)]);
        let second = get_ai_starting_card(&players[PlayerId::new(1)]);
        state.resolve_play_off([first.as_slice(), second.as_slice()])?;
    }

    let rules = Quatch;
    for _ in 0..max_actions {
        if let Some(result) = rules.is_terminal(state) {
            return Ok(Some(result));
        }
        state.take_ai_turn()?;
    }
    let result = rules.is_terminal(state);
    if result.is_none() {
        tracing::warn!(max_actions, turns = state.turn_count(), "autoplay hit the action cap");
    }
    Ok(result)
}
