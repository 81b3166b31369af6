//! Game state.
//!
//! `GameState` holds the two seats, the draw deck (top = index 0), the main
//! pile ("mpa", top = last), the bin, and turn bookkeeping. Fields are
//! crate-private: every mutation goes through the entry points in
//! `crate::game`, and everything else here is a read or a derived query.
//!
//! Derived queries (`target_card`, `is_reset`, `combo_count`,
//! `is_current_human`) are computed from the piles on demand rather than
//! stored, so they cannot drift from the cards.

use im::Vector;
use serde::Serialize;
use time::OffsetDateTime;

use super::action::ActionRecord;
use super::config::{Difficulty, GameConfig, PLAYER_COUNT};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{build_deck, shuffle, Card};
use crate::rules::resolver;
use crate::rules::turn::{DealStep, Stage, TurnDirection};

/// Full game state.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) deck: Vec<Card>,
    pub(crate) mpa: Vec<Card>,
    pub(crate) bin: Vec<Card>,
    pub(crate) current_player: Option<PlayerId>,
    pub(crate) stage: Stage,
    /// Next deal to perform while in SETUP.
    pub(crate) deal_step: Option<DealStep>,
    /// PLAY has started but the low-card play-off is unresolved.
    pub(crate) opening_pending: bool,
    pub(crate) turn_direction: TurnDirection,
    pub(crate) turn_count: u32,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) started_at: OffsetDateTime,
    pub(crate) seed: u64,
    pub(crate) history: Vector<ActionRecord>,
    #[serde(skip)]
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create a game in SETUP with a freshly built and shuffled deck.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = build_deck(&mut rng);
        let deck = shuffle(&mut rng, deck);

        let players = PlayerMap::new(PLAYER_COUNT, |id| {
            Player::new(
                id,
                config.names[id.index()].clone(),
                config.ai_seats[id.index()],
            )
        });

        tracing::info!(seed = rng.seed(), difficulty = %config.difficulty, "new game");

        Self {
            seed: rng.seed(),
            config,
            players,
            deck,
            mpa: Vec::new(),
            bin: Vec::new(),
            current_player: None,
            stage: Stage::Setup,
            deal_step: Some(DealStep::ReserveB),
            opening_pending: false,
            turn_direction: TurnDirection::default(),
            turn_count: 0,
            winner: None,
            started_at: OffsetDateTime::now_utc(),
            history: Vector::new(),
            rng,
        }
    }

    // === Reads ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// AI tier in effect.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Seed of this game's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Draw pile, top card first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Main pile, top card last.
    #[must_use]
    pub fn mpa(&self) -> &[Card] {
        &self.mpa
    }

    /// Cleared cards. They never return to play.
    #[must_use]
    pub fn bin(&self) -> &[Card] {
        &self.bin
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Next deal to perform, `None` once setup dealing is finished.
    #[must_use]
    pub fn deal_step(&self) -> Option<DealStep> {
        self.deal_step
    }

    /// The opening play-off still has to be resolved.
    #[must_use]
    pub fn opening_pending(&self) -> bool {
        self.opening_pending
    }

    #[must_use]
    pub fn turn_direction(&self) -> TurnDirection {
        self.turn_direction
    }

    /// Number of times the turn has passed.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|id| &self.players[id])
    }

    #[must_use]
    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    /// Every committed action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Derived queries ===

    /// Top of the main pile.
    #[must_use]
    pub fn target_card(&self) -> Option<Card> {
        resolver::target(&self.mpa)
    }

    /// The pile's top card is a Two.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        resolver::is_reset(&self.mpa)
    }

    /// Matching cards stacked on top of the pile (0, 2 or 3).
    #[must_use]
    pub fn combo_count(&self) -> u8 {
        resolver::combo_count(&self.mpa)
    }

    /// The seat to act is human-controlled.
    #[must_use]
    pub fn is_current_human(&self) -> bool {
        self.current_player
            .is_some_and(|id| !self.players[id].is_ai())
    }

    /// Every card in the game: seats, deck, pile and bin.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.players
            .values()
            .flat_map(Player::all_cards)
            .chain(self.deck.iter())
            .chain(self.mpa.iter())
            .chain(self.bin.iter())
    }
}
