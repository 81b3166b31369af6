//! `RulesEngine` implementation for Quatch.

use crate::ai::candidates::candidate_plays;
use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::RuleError;
use crate::rules::engine::{GameResult, RulesEngine};
use crate::rules::outcome::TurnOutcome;
use crate::rules::turn::Stage;
use crate::rules::validator::player_has_valid_move;

/// Quatch rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quatch;

impl RulesEngine for Quatch {
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        // Only the seat to act, and only once the opening is settled
        if state.stage() != Stage::Play
            || state.opening_pending()
            || state.current_player() != Some(player)
        {
            return vec![];
        }

        let seat = state.player(player);
        if seat.is_blind() {
            return (0..seat.reserve_b().len()).map(Action::Reveal).collect();
        }

        let target = state.target_card();
        let mut actions: Vec<Action> = candidate_plays(seat, target, true)
            .into_iter()
            .map(Action::Play)
            .collect();

        if !player_has_valid_move(seat, target) {
            actions.push(Action::Eat);
        }
        actions
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<TurnOutcome, RuleError> {
        state.apply(player, action)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(|winner| GameResult {
            winner: winner.id(),
            turns: state.turn_count(),
        })
    }
}
