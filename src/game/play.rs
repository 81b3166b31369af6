//! PLAY-stage transitions.
//!
//! Every entry point validates first and mutates only once the action is
//! known to be legal, so a rejected call leaves the state untouched. A
//! committed action runs the whole pipeline in one step:
//!
//! 1. move the cards (pile, hand, or bust pickup)
//! 2. resolve the main pile (clear into the bin on a Ten or four of a kind)
//! 3. refill the hand from the deck
//! 4. check for a win, then replay or pass the turn
//! 5. append to the action history

use rustc_hash::FxHashSet;

use crate::ai;
use crate::cards::{describe, same_rank, Card};
use crate::core::action::{Action, ActionRecord, CardGroup};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::RuleError;
use crate::rules::escalation::{active_source, PileSource};
use crate::rules::outcome::{OpeningOutcome, TurnEvent, TurnOutcome};
use crate::rules::refill::refill_count;
use crate::rules::resolver;
use crate::rules::turn::{self, Stage, TurnAdvance};
use crate::rules::validator::{is_valid_play, player_has_valid_move};

impl GameState {
    /// Resolve the opening play-off.
    ///
    /// `choices[i]` is seat `i`'s opening group; an empty group forfeits.
    /// The lower value leads and ties go to seat 0. The leader's group is
    /// committed as an ordinary hand play. If both seats forfeit, seat 0
    /// leads freely.
    pub fn resolve_play_off(
        &mut self,
        choices: [&[Card]; 2],
    ) -> Result<OpeningOutcome, RuleError> {
        self.require_stage(Stage::Play)?;
        if !self.opening_pending {
            return Err(RuleError::NoOpeningPending);
        }
        for (id, choice) in PlayerId::all(self.players.player_count()).zip(choices) {
            self.check_opening(id, choice)?;
        }

        let leader = match (choices[0].first(), choices[1].first()) {
            (None, None) => None,
            (Some(_), None) => Some(PlayerId::new(0)),
            (None, Some(_)) => Some(PlayerId::new(1)),
            (Some(a), Some(b)) if a.value() <= b.value() => Some(PlayerId::new(0)),
            (Some(_), Some(_)) => Some(PlayerId::new(1)),
        };

        self.opening_pending = false;
        let Some(leader) = leader else {
            self.current_player = Some(PlayerId::new(0));
            tracing::info!("both seats forfeited the play-off");
            return Ok(OpeningOutcome {
                leader: None,
                play: None,
            });
        };

        let cards = choices[leader.index()];
        tracing::info!(%leader, cards = %describe(cards), "play-off won");
        self.current_player = Some(leader);
        self.players[leader].remove_cards(PileSource::Hand, cards);
        let play = self.land_play(
            leader,
            CardGroup::from_slice(cards),
            PileSource::Hand,
            Action::play(cards),
        );
        Ok(OpeningOutcome {
            leader: Some(leader),
            play: Some(play),
        })
    }

    /// Play a same-rank group from the active pile (hand or reserve A).
    pub fn commit_play(
        &mut self,
        player: PlayerId,
        cards: &[Card],
    ) -> Result<TurnOutcome, RuleError> {
        self.require_turn(player)?;

        let seat = &self.players[player];
        if seat.is_blind() {
            return Err(RuleError::BlindPhase { player });
        }
        check_distinct(cards)?;

        let source = active_source(seat);
        let pile = seat.pile(source);
        if let Some(&stray) = cards.iter().find(|c| !pile.contains(c)) {
            return Err(if seat.all_cards().any(|c| *c == stray) {
                RuleError::MixedSources
            } else {
                RuleError::CardNotHeld {
                    player,
                    card: stray,
                }
            });
        }

        let target = self.target_card();
        if !is_valid_play(cards, target, Some(seat)) {
            return Err(RuleError::IllegalPlay {
                cards: cards.to_vec(),
                target,
            });
        }

        self.players[player].remove_cards(source, cards);
        Ok(self.land_play(
            player,
            CardGroup::from_slice(cards),
            source,
            Action::play(cards),
        ))
    }

    /// Turn over the reserve B card at `index` and play it.
    ///
    /// A card that cannot legally be played busts: it goes to the hand
    /// together with the whole pile, and the turn passes.
    pub fn reveal_reserve(
        &mut self,
        player: PlayerId,
        index: usize,
    ) -> Result<TurnOutcome, RuleError> {
        self.require_turn(player)?;

        let seat = &self.players[player];
        if !seat.is_blind() {
            return Err(RuleError::NotBlindPhase { player });
        }
        let len = seat.reserve_b().len();
        let Some(&card) = seat.reserve_b().get(index) else {
            return Err(RuleError::ReserveIndex { index, len });
        };

        let valid = is_valid_play(&[card], self.target_card(), Some(seat));
        self.players[player]
            .pile_mut(PileSource::ReserveB)
            .remove(index);

        if valid {
            return Ok(self.land_play(
                player,
                CardGroup::from_slice(&[card]),
                PileSource::ReserveB,
                Action::Reveal(index),
            ));
        }

        let picked_up = self.mpa.len() + 1;
        let pile: Vec<Card> = self.mpa.drain(..).collect();
        let seat = &mut self.players[player];
        seat.receive(std::iter::once(card).chain(pile));
        seat.add_eaten(picked_up as u32);
        tracing::debug!(%player, %card, picked_up, "bust");

        Ok(self.finish_turn(
            player,
            Action::Reveal(index),
            TurnEvent::Busted { card, picked_up },
            false,
        ))
    }

    /// Pick up the whole pile. Only allowed with no legal play.
    pub fn commit_eat(&mut self, player: PlayerId) -> Result<TurnOutcome, RuleError> {
        self.require_turn(player)?;

        let seat = &self.players[player];
        if seat.is_blind() || player_has_valid_move(seat, self.target_card()) {
            return Err(RuleError::IllegalEat { player });
        }

        let picked_up = self.mpa.len();
        let pile: Vec<Card> = self.mpa.drain(..).collect();
        let seat = &mut self.players[player];
        seat.receive(pile);
        seat.add_eaten(picked_up as u32);
        tracing::debug!(%player, picked_up, "ate the pile");

        Ok(self.finish_turn(player, Action::Eat, TurnEvent::Ate { picked_up }, false))
    }

    /// Commit any play-stage action.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<TurnOutcome, RuleError> {
        match action {
            Action::Play(cards) => self.commit_play(player, cards),
            Action::Reveal(index) => self.reveal_reserve(player, *index),
            Action::Eat => self.commit_eat(player),
        }
    }

    /// Let the configured AI tier act for the seat whose turn it is.
    pub fn take_ai_turn(&mut self) -> Result<TurnOutcome, RuleError> {
        let player = self.current_player.ok_or(RuleError::WrongStage { stage: self.stage })?;
        self.require_turn(player)?;

        let target = self.target_card();
        let action = ai::choose_action(
            &self.players[player],
            target,
            self.mpa.len(),
            self.deck.len(),
            self.config.difficulty,
            &mut self.rng,
        );
        tracing::debug!(%player, ?action, difficulty = %self.config.difficulty, "ai chose");
        self.apply(player, &action)
    }

    // === Pipeline ===

    /// Place cards already removed from `source` onto the pile, then
    /// resolve, refill and advance.
    fn land_play(
        &mut self,
        player: PlayerId,
        cards: CardGroup,
        source: PileSource,
        action: Action,
    ) -> TurnOutcome {
        let resolution = resolver::resolve(&mut self.mpa, &mut self.bin, &cards);
        if let Some(kind) = resolution.clear {
            tracing::debug!(%player, ?kind, binned = resolution.binned, "pile cleared");
        }

        let hand_after_play = self.players[player].hand().len();
        let draw = refill_count(
            source,
            hand_after_play,
            resolution.is_replay(),
            self.deck.len(),
        );
        let drawn: Vec<Card> = self.deck.drain(..draw).collect();
        if !drawn.is_empty() {
            self.players[player].receive(drawn.iter().copied());
            tracing::debug!(%player, drawn = drawn.len(), deck = self.deck.len(), "refilled");
        }

        tracing::debug!(
            %player,
            cards = %describe(&cards),
            %source,
            cleared = resolution.is_replay(),
            "played"
        );

        self.finish_turn(
            player,
            action,
            TurnEvent::Played {
                cards,
                source,
                clear: resolution.clear,
                drawn,
            },
            resolution.is_replay(),
        )
    }

    /// Record the action and move the turn on.
    fn finish_turn(
        &mut self,
        player: PlayerId,
        action: Action,
        event: TurnEvent,
        replay: bool,
    ) -> TurnOutcome {
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_count));

        let won = self.players[player].is_out();
        let advance = turn::advance(
            player,
            self.turn_direction,
            self.players.player_count(),
            replay,
            won,
        );
        match advance {
            TurnAdvance::GameOver { winner } => {
                self.stage = Stage::GameOver;
                self.winner = Some(winner);
                tracing::info!(%winner, turns = self.turn_count, "game over");
            }
            TurnAdvance::Next(next) => {
                self.current_player = Some(next);
                self.turn_count += 1;
            }
            TurnAdvance::Replay(_) => {}
        }

        TurnOutcome {
            player,
            event,
            advance,
        }
    }

    // === Checks ===

    fn require_turn(&self, player: PlayerId) -> Result<(), RuleError> {
        self.require_stage(Stage::Play)?;
        if self.opening_pending {
            return Err(RuleError::OpeningPending);
        }
        if self.current_player != Some(player) {
            return Err(RuleError::NotYourTurn { player });
        }
        Ok(())
    }

    fn check_opening(&self, player: PlayerId, cards: &[Card]) -> Result<(), RuleError> {
        if cards.is_empty() {
            return Ok(());
        }
        check_distinct(cards)?;
        let hand = self.players[player].hand();
        if let Some(&card) = cards.iter().find(|c| !hand.contains(c)) {
            return Err(RuleError::CardNotHeld { player, card });
        }
        if cards.iter().any(|c| c.is_special()) {
            return Err(RuleError::SpecialOpening);
        }
        if !same_rank(cards) {
            return Err(RuleError::IllegalPlay {
                cards: cards.to_vec(),
                target: None,
            });
        }
        Ok(())
    }
}

fn check_distinct(cards: &[Card]) -> Result<(), RuleError> {
    let mut seen = FxHashSet::default();
    match cards.iter().find(|c| !seen.insert(**c)) {
        Some(&card) => Err(RuleError::DuplicateCard { card }),
        None => Ok(()),
    }
}
