//! Game construction.
//!
//! `GameBuilder` creates a fresh game in SETUP, or arranges an explicit
//! PLAY-stage table for scenarios and tests. An arranged table still holds
//! the whole 46-card universe: every card not placed explicitly goes to the
//! deck, or to the bin when the deck is given.

use rustc_hash::FxHashSet;

use crate::cards::{shuffle, universe, Card, Rank, Suit};
use crate::core::config::{Difficulty, GameConfig, PLAYER_COUNT};
use crate::core::player::{Player, PlayerId};
use crate::core::state::GameState;
use crate::error::RuleError;
use crate::rules::turn::Stage;

/// Piles of one seat in an arranged table.
#[derive(Clone, Debug, Default)]
pub struct SeatLayout {
    hand: Vec<Card>,
    reserve_a: Vec<Card>,
    reserve_b: Vec<Card>,
    cards_eaten: u32,
}

impl SeatLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hand(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand = cards.into_iter().collect();
        self
    }

    pub fn with_reserve_a(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.reserve_a = cards.into_iter().collect();
        self
    }

    pub fn with_reserve_b(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.reserve_b = cards.into_iter().collect();
        self
    }

    pub fn with_cards_eaten(mut self, count: u32) -> Self {
        self.cards_eaten = count;
        self
    }

    fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand
            .iter()
            .chain(self.reserve_a.iter())
            .chain(self.reserve_b.iter())
    }
}

/// An explicit PLAY-stage table.
#[derive(Clone, Debug)]
pub struct TableLayout {
    seats: [SeatLayout; PLAYER_COUNT],
    mpa: Vec<Card>,
    bin: Vec<Card>,
    deck: Option<Vec<Card>>,
    current: PlayerId,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            seats: Default::default(),
            mpa: Vec::new(),
            bin: Vec::new(),
            deck: None,
            current: PlayerId::new(0),
        }
    }
}

impl TableLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seat(mut self, player: PlayerId, seat: SeatLayout) -> Self {
        self.seats[player.index()] = seat;
        self
    }

    /// Main pile, bottom first.
    pub fn with_mpa(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.mpa = cards.into_iter().collect();
        self
    }

    pub fn with_bin(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.bin = cards.into_iter().collect();
        self
    }

    /// Fix the deck, top first. Unplaced cards then go to the bin.
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = Some(cards.into_iter().collect());
        self
    }

    /// Seat to act first.
    pub fn with_current(mut self, player: PlayerId) -> Self {
        self.current = player;
        self
    }

    fn placed(&self) -> impl Iterator<Item = &Card> {
        self.seats
            .iter()
            .flat_map(SeatLayout::cards)
            .chain(self.mpa.iter())
            .chain(self.bin.iter())
            .chain(self.deck.iter().flatten())
    }
}

/// Builder for creating a game.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn names(mut self, first: &str, second: &str) -> Self {
        self.config = self.config.with_names(first, second);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.config = self.config.with_difficulty(difficulty);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn ai_seats(mut self, seats: [bool; PLAYER_COUNT]) -> Self {
        self.config = self.config.with_ai_seats(seats);
        self
    }

    /// Build a new game in SETUP.
    pub fn build(self) -> GameState {
        GameState::new(self.config)
    }

    /// Build a PLAY-stage game from an explicit table.
    ///
    /// Fails on a card placed twice or on a second Two or Ten.
    pub fn arrange(self, layout: TableLayout) -> Result<GameState, RuleError> {
        let mut seen = FxHashSet::default();
        let mut two = None;
        let mut ten = None;
        for &card in layout.placed() {
            if !seen.insert(card) {
                return Err(RuleError::DuplicateCard { card });
            }
            let slot = match card.rank {
                Rank::Two => &mut two,
                Rank::Ten => &mut ten,
                _ => continue,
            };
            if slot.replace(card.suit).is_some() {
                return Err(RuleError::ExtraSpecial { card });
            }
        }

        let mut state = GameState::new(self.config);
        let two_suit = two.unwrap_or_else(|| Suit::ALL[state.rng.gen_index(Suit::ALL.len())]);
        let ten_suit = ten.unwrap_or_else(|| Suit::ALL[state.rng.gen_index(Suit::ALL.len())]);
        let rest: Vec<Card> = universe(two_suit, ten_suit)
            .into_iter()
            .filter(|c| !seen.contains(c))
            .collect();
        let rest = shuffle(&mut state.rng, rest);

        let TableLayout {
            seats,
            mpa,
            mut bin,
            deck,
            current,
        } = layout;

        state.deck = match deck {
            Some(deck) => {
                bin.extend(rest);
                deck
            }
            None => rest,
        };
        state.mpa = mpa;
        state.bin = bin;

        for (index, seat) in seats.into_iter().enumerate() {
            let id = PlayerId::new(index as u8);
            let old = &state.players[id];
            let mut player = Player::new(id, old.name(), old.is_ai())
                .with_hand(seat.hand)
                .with_reserve_a(seat.reserve_a)
                .with_reserve_b(seat.reserve_b);
            player.add_eaten(seat.cards_eaten);
            state.players[id] = player;
        }

        state.stage = Stage::Play;
        state.deal_step = None;
        state.opening_pending = false;
        state.current_player = Some(current);

        tracing::debug!(%current, deck = state.deck.len(), "table arranged");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_build_is_setup() {
        let state = GameBuilder::new()
            .names("Ann", "")
            .difficulty(Difficulty::Hard)
            .seed(4)
            .build();
        assert_eq!(state.stage(), Stage::Setup);
        assert_eq!(state.difficulty(), Difficulty::Hard);
        assert_eq!(state.player(PlayerId::new(1)).name(), "Opponent");
    }

    #[test]
    fn test_arrange_fills_deck() {
        let layout = TableLayout::new()
            .with_seat(
                PlayerId::new(0),
                SeatLayout::new().with_hand([c(Rank::Two, Suit::Clubs)]),
            )
            .with_mpa([c(Rank::Five, Suit::Hearts)])
            .with_current(PlayerId::new(1));
        let state = GameBuilder::new().seed(2).arrange(layout).unwrap();

        assert_eq!(state.stage(), Stage::Play);
        assert_eq!(state.current_player(), Some(PlayerId::new(1)));
        assert_eq!(state.deck().len(), DECK_SIZE - 2);
        assert!(state.bin().is_empty());

        let cards: FxHashSet<Card> = state.all_cards().copied().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        let twos = state.all_cards().filter(|c| c.rank == Rank::Two).count();
        assert_eq!(twos, 1);
    }

    #[test]
    fn test_arrange_with_deck_bins_the_rest() {
        let layout = TableLayout::new()
            .with_seat(
                PlayerId::new(0),
                SeatLayout::new().with_hand([c(Rank::Six, Suit::Clubs)]),
            )
            .with_deck([c(Rank::Ace, Suit::Hearts)]);
        let state = GameBuilder::new().seed(2).arrange(layout).unwrap();

        assert_eq!(state.deck(), &[c(Rank::Ace, Suit::Hearts)]);
        assert_eq!(state.bin().len(), DECK_SIZE - 2);
        assert_eq!(state.all_cards().count(), DECK_SIZE);
    }

    #[test]
    fn test_arrange_rejects_duplicates() {
        let layout = TableLayout::new()
            .with_seat(
                PlayerId::new(0),
                SeatLayout::new().with_hand([c(Rank::Six, Suit::Clubs)]),
            )
            .with_mpa([c(Rank::Six, Suit::Clubs)]);
        assert_eq!(
            GameBuilder::new().arrange(layout).unwrap_err(),
            RuleError::DuplicateCard {
                card: c(Rank::Six, Suit::Clubs)
            }
        );
    }

    #[test]
    fn test_arrange_rejects_second_ten() {
        let layout = TableLayout::new()
            .with_mpa([c(Rank::Ten, Suit::Clubs), c(Rank::Ten, Suit::Hearts)]);
        assert_eq!(
            GameBuilder::new().arrange(layout).unwrap_err(),
            RuleError::ExtraSpecial {
                card: c(Rank::Ten, Suit::Hearts)
            }
        );
    }

    #[test]
    fn test_arrange_keeps_eaten_count() {
        let layout = TableLayout::new().with_seat(
            PlayerId::new(1),
            SeatLayout::new()
                .with_hand([c(Rank::Nine, Suit::Clubs)])
                .with_cards_eaten(7),
        );
        let state = GameBuilder::new().seed(9).arrange(layout).unwrap();
        assert_eq!(state.player(PlayerId::new(1)).cards_eaten(), 7);
        assert!(state.player(PlayerId::new(1)).is_ai());
    }
}
