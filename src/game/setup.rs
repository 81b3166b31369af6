//! SETUP and SWAP transitions.
//!
//! Setup is three paired deals of `DEAL_SIZE` cards: reserve B, then
//! reserve A, then the hand. Seat 0 takes the top cards of the deck, seat 1
//! the next ones. After the hand deal the game moves to SWAP, where each
//! seat may exchange hand cards with reserve A cards until play starts.

use crate::cards::{shuffle, Card};
use crate::core::config::{normalize_names, DEAL_SIZE};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::RuleError;
use crate::rules::escalation::PileSource;
use crate::rules::turn::{DealStep, Stage};

impl GameState {
    /// Perform the next paired deal and return which one it was.
    pub fn deal_next(&mut self) -> Result<DealStep, RuleError> {
        self.require_stage(Stage::Setup)?;
        let Some(step) = self.deal_step else {
            return Err(RuleError::WrongStage { stage: self.stage });
        };

        let source = match step {
            DealStep::ReserveB => PileSource::ReserveB,
            DealStep::ReserveA => PileSource::ReserveA,
            DealStep::Hand => PileSource::Hand,
        };

        for id in PlayerId::all(self.players.player_count()) {
            let take = DEAL_SIZE.min(self.deck.len());
            let dealt: Vec<Card> = self.deck.drain(..take).collect();
            let seat = &mut self.players[id];
            if source == PileSource::Hand {
                seat.receive(dealt);
            } else {
                seat.pile_mut(source).extend(dealt);
            }
        }
        tracing::debug!(?step, deck = self.deck.len(), "dealt");

        self.deal_step = step.next();
        if self.deal_step.is_none() {
            self.stage = Stage::Swap;
            tracing::info!(stage = ?self.stage, "dealing finished");
        }
        Ok(step)
    }

    /// Deal whatever is left of setup.
    pub fn deal_all(&mut self) -> Result<(), RuleError> {
        while self.deal_step.is_some() {
            self.deal_next()?;
        }
        Ok(())
    }

    /// Reshuffle the deck. Only before the first card is dealt.
    pub fn reshuffle(&mut self) -> Result<(), RuleError> {
        self.require_stage(Stage::Setup)?;
        if self.deal_step != Some(DealStep::ReserveB) {
            return Err(RuleError::WrongStage { stage: self.stage });
        }
        let deck = std::mem::take(&mut self.deck);
        self.deck = shuffle(&mut self.rng, deck);
        tracing::debug!("deck reshuffled");
        Ok(())
    }

    /// Exchange a hand card with a reserve A card of the same seat.
    pub fn swap(
        &mut self,
        player: PlayerId,
        hand_card: Card,
        reserve_card: Card,
    ) -> Result<(), RuleError> {
        self.require_stage(Stage::Swap)?;

        let seat = &self.players[player];
        if !seat.hand().contains(&hand_card) || !seat.reserve_a().contains(&reserve_card) {
            return Err(RuleError::InvalidSwap {
                hand: hand_card,
                reserve: reserve_card,
            });
        }

        let seat = &mut self.players[player];
        seat.remove_cards(PileSource::Hand, &[hand_card]);
        seat.remove_cards(PileSource::ReserveA, &[reserve_card]);
        seat.pile_mut(PileSource::ReserveA).push(hand_card);
        seat.receive([reserve_card]);

        tracing::debug!(%player, %hand_card, %reserve_card, "swapped");
        Ok(())
    }

    /// Leave SWAP and start PLAY. Seat 0 holds the turn until the opening
    /// play-off is resolved.
    pub fn start_play(&mut self) -> Result<(), RuleError> {
        self.require_stage(Stage::Swap)?;
        self.stage = Stage::Play;
        self.current_player = Some(PlayerId::new(0));
        self.opening_pending = true;
        tracing::info!(stage = ?self.stage, "play started");
        Ok(())
    }

    /// Rename both seats. Blank names fall back to the defaults.
    pub fn rename_players(&mut self, first: &str, second: &str) {
        let names = normalize_names(first, second);
        for ((_, seat), name) in self.players.iter_mut().zip(names.iter()) {
            seat.set_name(name.clone());
        }
        self.config.names = names;
    }

    pub(crate) fn require_stage(&self, stage: Stage) -> Result<(), RuleError> {
        if self.stage == stage {
            Ok(())
        } else if self.stage == Stage::GameOver {
            Err(RuleError::GameOver)
        } else {
            Err(RuleError::WrongStage { stage: self.stage })
        }
    }
}
