//! Card primitives: suits, ranks and the card value.
//!
//! Ranks are ordered by `value()` (Two = 2 .. Ace = 14). Two and Ten are the
//! special ranks: a Two resets the pile and a Ten clears it. The deck holds
//! exactly one of each (see `cards::deck`).

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, declared in ascending value order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value used for pile comparisons (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Two and Ten may be played onto anything.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Rank::Two | Rank::Ten)
    }

    /// Short label ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single playing card.
///
/// Every card in the 46-card universe is distinct, so a `Card` doubles as
/// its own identity: two cards compare equal only if they are the same
/// physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Comparison value of the card's rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// True for Two and Ten.
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.rank.is_special()
    }

    /// Stable string identifier, e.g. `"10-♠"`.
    #[must_use]
    pub fn id(self) -> String {
        format!("{}-{}", self.rank, self.suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// True if `cards` is nonempty and every card shares one rank.
#[must_use]
pub fn same_rank(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.rank == first.rank),
        None => false,
    }
}

/// Space-separated display form, e.g. `"4♠ 4♥"`.
#[must_use]
pub fn describe(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort cards ascending by value. Stable, so equal ranks keep their order.
pub fn sort_by_value(cards: &mut [Card]) {
    cards.sort_by_key(|c| c.value());
}
