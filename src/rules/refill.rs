//! Refill policy after a play.
//!
//! Only hand plays refill, topping the hand back up to `HAND_TARGET` from
//! the top of the deck. After a clear the refill is skipped unless the hand
//! is now empty; the missing cards are then drawn on the seat's next hand
//! play. An empty deck simply yields nothing.

use crate::core::config::HAND_TARGET;

use super::escalation::PileSource;

/// How many cards to draw after a play.
///
/// - `source`: pile the play came from
/// - `hand_after_play`: hand size once the played cards are removed
/// - `cleared`: the play cleared the pile
/// - `deck_remaining`: cards left to draw
#[must_use]
pub fn refill_count(
    source: PileSource,
    hand_after_play: usize,
    cleared: bool,
    deck_remaining: usize,
) -> usize {
    if source != PileSource::Hand {
        return 0;
    }
    if cleared && hand_after_play > 0 {
        return 0;
    }
    HAND_TARGET.saturating_sub(hand_after_play).min(deck_remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tops_up_to_three() {
        assert_eq!(refill_count(PileSource::Hand, 2, false, 30), 1);
        assert_eq!(refill_count(PileSource::Hand, 0, false, 30), 3);
    }

    #[test]
    fn test_no_refill_above_target() {
        assert_eq!(refill_count(PileSource::Hand, 5, false, 30), 0);
        assert_eq!(refill_count(PileSource::Hand, 3, false, 30), 0);
    }

    #[test]
    fn test_limited_by_deck() {
        assert_eq!(refill_count(PileSource::Hand, 0, false, 2), 2);
        assert_eq!(refill_count(PileSource::Hand, 1, false, 0), 0);
    }

    #[test]
    fn test_reserves_never_refill() {
        assert_eq!(refill_count(PileSource::ReserveA, 0, false, 30), 0);
        assert_eq!(refill_count(PileSource::ReserveB, 0, true, 30), 0);
    }

    #[test]
    fn test_clear_defers_unless_hand_empty() {
        assert_eq!(refill_count(PileSource::Hand, 1, true, 30), 0);
        assert_eq!(refill_count(PileSource::Hand, 0, true, 30), 3);
    }
}
