#![allow(dead_code)]

//! Shared helpers for integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use quatch::{Card, GameBuilder, GameState, PlayerId, Rank, SeatLayout, Suit, TableLayout};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const P0: PlayerId = PlayerId::new(0);
pub const P1: PlayerId = PlayerId::new(1);

pub fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// PLAY-stage table with seat 0 to act.
pub fn table(seat0: SeatLayout, seat1: SeatLayout, mpa: Vec<Card>) -> GameState {
    init_logging();
    let layout = TableLayout::new()
        .with_seat(P0, seat0)
        .with_seat(P1, seat1)
        .with_mpa(mpa);
    GameBuilder::new()
        .seed(99)
        .arrange(layout)
        .expect("layout should be valid")
}
