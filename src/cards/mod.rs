//! Cards: suits, ranks, and the 46-card deck.

pub mod card;
pub mod deck;

pub use card::{describe, same_rank, sort_by_value, Card, Rank, Suit};
pub use deck::{build_deck, shuffle, universe, DECK_SIZE};
