//! Deck construction and shuffling.
//!
//! The deck is a standard 52-card deck reduced to 46: only one Two and one
//! Ten survive, each of a randomly chosen suit. All other ranks keep one
//! card per suit.

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 46;

/// Build the 46-card universe with the given suits for the single Two and
/// single Ten.
///
/// Order: suit by suit, rank by rank, with the Two and Ten appended last.
#[must_use]
pub fn universe(two_suit: Suit, ten_suit: Suit) -> Vec<Card> {
    let mut cards: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| {
            Rank::ALL
                .iter()
                .filter(|rank| !rank.is_special())
                .map(move |&rank| Card::new(rank, suit))
        })
        .collect();

    cards.push(Card::new(Rank::Two, two_suit));
    cards.push(Card::new(Rank::Ten, ten_suit));
    cards
}

/// Build an unshuffled deck, choosing the Two and Ten suits at random.
#[must_use]
pub fn build_deck(rng: &mut GameRng) -> Vec<Card> {
    let two_suit = Suit::ALL[rng.gen_index(Suit::ALL.len())];
    let ten_suit = Suit::ALL[rng.gen_index(Suit::ALL.len())];
    universe(two_suit, ten_suit)
}

/// Return a uniformly shuffled permutation of `cards`.
#[must_use]
pub fn shuffle(rng: &mut GameRng, mut cards: Vec<Card>) -> Vec<Card> {
    rng.shuffle(&mut cards);
    cards
}
