//! End-of-game statistics.

use serde::Serialize;
use time::{Duration, OffsetDateTime};

use crate::core::player::{Player, PlayerId};
use crate::core::state::GameState;
use crate::rules::turn::Stage;

/// Per-seat statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub is_ai: bool,
    pub cards_eaten: u32,
    pub hand: usize,
    pub reserve_a: usize,
    pub reserve_b: usize,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            is_ai: player.is_ai(),
            cards_eaten: player.cards_eaten(),
            hand: player.hand().len(),
            reserve_a: player.reserve_a().len(),
            reserve_b: player.reserve_b().len(),
        }
    }
}

/// Snapshot of a game's statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub stage: Stage,
    pub winner: Option<String>,
    /// Elapsed time as `m:ss`.
    pub elapsed: String,
    pub turns: u32,
    pub deck_remaining: usize,
    pub binned: usize,
    pub players: Vec<PlayerSummary>,
}

impl GameState {
    /// Statistics as of now.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        self.summary_at(OffsetDateTime::now_utc())
    }

    /// Statistics as of `now`.
    #[must_use]
    pub fn summary_at(&self, now: OffsetDateTime) -> GameSummary {
        GameSummary {
            stage: self.stage,
            winner: self.winner().map(|p| p.name().to_string()),
            elapsed: format_elapsed(now - self.started_at),
            turns: self.turn_count,
            deck_remaining: self.deck.len(),
            binned: self.bin.len(),
            players: self.players.values().map(PlayerSummary::from).collect(),
        }
    }
}

/// Format a duration as `m:ss`. Negative durations read as zero.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.whole_seconds().max(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}
