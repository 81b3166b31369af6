//! Game configuration.
//!
//! A game is configured once, at creation:
//! - seat names and which seats the AI controls
//! - AI `Difficulty`
//! - an optional RNG seed for reproducible games
//!
//! Rule constants (hand target, deal size) are fixed and live here as
//! `pub const`s rather than configuration.

use serde::{Deserialize, Serialize};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Cards dealt to each pile per seat during setup.
pub const DEAL_SIZE: usize = 3;

/// A hand-sourced play refills the hand up to this many cards.
pub const HAND_TARGET: usize = 3;

/// Fallback name for seat 0.
pub const DEFAULT_FIRST_NAME: &str = "Player 1";

/// Fallback name for seat 1.
pub const DEFAULT_SECOND_NAME: &str = "Opponent";

/// AI difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    /// Hard and Extreme may split a rank group and play part of it.
    #[must_use]
    pub const fn allows_partial_groups(self) -> bool {
        matches!(self, Difficulty::Hard | Difficulty::Extreme)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        };
        f.write_str(label)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat names, seat 0 first.
    pub names: [String; PLAYER_COUNT],

    /// Which seats the AI plays.
    pub ai_seats: [bool; PLAYER_COUNT],

    /// Tier used for every AI seat.
    pub difficulty: Difficulty,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            names: [DEFAULT_FIRST_NAME.to_string(), DEFAULT_SECOND_NAME.to_string()],
            ai_seats: [false, true],
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration: human in seat 0, Medium AI in seat 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set seat names. Blank names fall back to the defaults.
    #[must_use]
    pub fn with_names(mut self, first: &str, second: &str) -> Self {
        self.names = normalize_names(first, second);
        self
    }

    /// Set the AI difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose which seats the AI controls.
    #[must_use]
    pub fn with_ai_seats(mut self, seats: [bool; PLAYER_COUNT]) -> Self {
        self.ai_seats = seats;
        self
    }

    /// Every seat AI-controlled (simulation).
    #[must_use]
    pub fn all_ai(self) -> Self {
        self.with_ai_seats([true; PLAYER_COUNT])
    }
}

/// Trim names, substituting defaults for blanks.
#[must_use]
pub fn normalize_names(first: &str, second: &str) -> [String; PLAYER_COUNT] {
    let pick = |name: &str, fallback: &str| {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            fallback.to_string()
        } else {
            trimmed.to_string()
        }
    };
    [pick(first, DEFAULT_FIRST_NAME), pick(second, DEFAULT_SECOND_NAME)]
}
