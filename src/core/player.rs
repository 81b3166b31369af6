//! Player identification, per-seat storage, and seat state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are 0-based.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexable by `PlayerId`.
//!
//! ## Player
//!
//! A seat's three piles: the hand, reserve A ("Last Chance", face up) and
//! reserve B ("Last Stand", face down, addressed by position).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{sort_by_value, Card};
use crate::rules::escalation::PileSource;

/// Seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use quatch::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use quatch::core::{PlayerId, PlayerMap};
///
/// let mut eaten: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// eaten[PlayerId::new(1)] += 4;
/// assert_eq!(eaten[PlayerId::new(1)], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One seat at the table.
///
/// The hand is kept sorted ascending by value after every addition.
/// Reserve A and reserve B are never re-sorted; reserve B is addressed by
/// position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<Card>,
    reserve_a: Vec<Card>,
    reserve_b: Vec<Card>,
    is_ai: bool,
    cards_eaten: u32,
}

impl Player {
    /// Create a seat with empty piles.
    pub fn new(id: PlayerId, name: impl Into<String>, is_ai: bool) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            reserve_a: Vec::new(),
            reserve_b: Vec::new(),
            is_ai,
            cards_eaten: 0,
        }
    }

    /// Set the hand (sorted on entry).
    #[must_use]
    pub fn with_hand(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand = cards.into_iter().collect();
        sort_by_value(&mut self.hand);
        self
    }

    /// Set reserve A.
    #[must_use]
    pub fn with_reserve_a(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.reserve_a = cards.into_iter().collect();
        self
    }

    /// Set reserve B. Order is preserved.
    #[must_use]
    pub fn with_reserve_b(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.reserve_b = cards.into_iter().collect();
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Face-up reserve ("Last Chance").
    #[must_use]
    pub fn reserve_a(&self) -> &[Card] {
        &self.reserve_a
    }

    /// Face-down reserve ("Last Stand").
    #[must_use]
    pub fn reserve_b(&self) -> &[Card] {
        &self.reserve_b
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    /// Total cards picked up from the pile over the game.
    #[must_use]
    pub fn cards_eaten(&self) -> u32 {
        self.cards_eaten
    }

    /// Cards of one pile.
    #[must_use]
    pub fn pile(&self, source: PileSource) -> &[Card] {
        match source {
            PileSource::Hand => &self.hand,
            PileSource::ReserveA => &self.reserve_a,
            PileSource::ReserveB => &self.reserve_b,
        }
    }

    /// Cards held across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len() + self.reserve_a.len() + self.reserve_b.len()
    }

    /// Hand and reserve A are both exhausted.
    #[must_use]
    pub fn is_blind(&self) -> bool {
        self.hand.is_empty() && self.reserve_a.is_empty()
    }

    /// No cards left anywhere.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.total_cards() == 0
    }

    /// Iterate every card this seat holds.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand
            .iter()
            .chain(self.reserve_a.iter())
            .chain(self.reserve_b.iter())
    }

    // === Mutation (crate-internal; all game mutation flows through `GameState`) ===

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn pile_mut(&mut self, source: PileSource) -> &mut Vec<Card> {
        match source {
            PileSource::Hand => &mut self.hand,
            PileSource::ReserveA => &mut self.reserve_a,
            PileSource::ReserveB => &mut self.reserve_b,
        }
    }

    /// Add cards to the hand and re-sort it.
    pub(crate) fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
        sort_by_value(&mut self.hand);
    }

    /// Remove `cards` from one pile.
    ///
    /// Returns false (leaving the pile untouched) if any card is missing.
    pub(crate) fn remove_cards(&mut self, source: PileSource, cards: &[Card]) -> bool {
        let pile = self.pile_mut(source);
        if !cards.iter().all(|c| pile.contains(c)) {
            return false;
        }
        pile.retain(|c| !cards.contains(c));
        true
    }

    pub(crate) fn add_eaten(&mut self, count: u32) {
        self.cards_eaten += count;
    }
}
