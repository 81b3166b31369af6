//! Play legality.
//!
//! A play is a nonempty group of one rank. Two and Ten go on anything;
//! anything goes on an empty pile or on a Two; otherwise the played value
//! must be at least the target's. A seat may never win the game with a
//! Two or Ten.

use crate::cards::{same_rank, Card, Rank};
use crate::core::player::Player;

use super::escalation::{source_of, PileSource};

/// Would playing `selected` leave `player` holding nothing at all?
///
/// The pile is identified the same way as `source_of`: hand first, then
/// reserve A, otherwise reserve B.
#[must_use]
pub fn is_winning_play(player: &Player, selected: &[Card]) -> bool {
    let hand = player.hand().len();
    let reserve_a = player.reserve_a().len();
    let reserve_b = player.reserve_b().len();
    let n = selected.len();

    match source_of(player, selected) {
        PileSource::Hand => hand == n && reserve_a == 0 && reserve_b == 0,
        PileSource::ReserveA => hand == 0 && reserve_a == n && reserve_b == 0,
        PileSource::ReserveB => hand == 0 && reserve_a == 0 && reserve_b == n,
    }
}

/// Is `selected` a legal play onto `target`?
///
/// `player` is only needed for the no-winning-wildcard restriction; pass
/// `None` to check the rank rule alone.
#[must_use]
pub fn is_valid_play(selected: &[Card], target: Option<Card>, player: Option<&Player>) -> bool {
    if !same_rank(selected) {
        return false;
    }
    let lead = selected[0];

    if let Some(player) = player {
        if lead.is_special() && is_winning_play(player, selected) {
            return false;
        }
    }

    if lead.is_special() {
        return true;
    }

    match target {
        None => true,
        Some(top) if top.rank == Rank::Two => true,
        Some(top) => selected.iter().all(|c| c.value() >= top.value()),
    }
}

/// Does `player` have anything legal to play onto `target`?
///
/// A blind (reserve B) seat always "has a move": it must reveal a card and
/// may not choose to eat.
#[must_use]
pub fn player_has_valid_move(player: &Player, target: Option<Card>) -> bool {
    if player.is_blind() {
        return true;
    }

    let pile = if player.hand().is_empty() {
        player.reserve_a()
    } else {
        player.hand()
    };

    if pile
        .iter()
        .any(|&card| is_valid_play(&[card], target, Some(player)))
    {
        return true;
    }

    // Then whole-rank groups.
    let mut seen = Vec::with_capacity(pile.len());
    for card in pile {
        if seen.contains(&card.rank) {
            continue;
        }
        seen.push(card.rank);
        let group: Vec<Card> = pile.iter().copied().filter(|c| c.rank == card.rank).collect();
        if group.len() > 1 && is_valid_play(&group, target, Some(player)) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::player::PlayerId;

    fn c(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts)
    }

    fn seat() -> Player {
        Player::new(PlayerId::new(0), "Ann", false)
    }

    #[test]
    fn test_empty_and_mixed_rejected() {
        assert!(!is_valid_play(&[], None, None));
        let mixed = [c(Rank::Four), c(Rank::Five)];
        assert!(!is_valid_play(&mixed, None, None));
    }

    #[test]
    fn test_empty_pile_accepts_anything() {
        assert!(is_valid_play(&[c(Rank::Three)], None, None));
    }

    #[test]
    fn test_value_rule() {
        let target = Some(Card::new(Rank::Nine, Suit::Spades));
        assert!(!is_valid_play(&[c(Rank::Eight)], target, None));
        assert!(is_valid_play(&[c(Rank::Nine)], target, None));
        assert!(is_valid_play(&[c(Rank::King)], target, None));
    }

    #[test]
    fn test_specials_play_on_anything() {
        let target = Some(Card::new(Rank::Ace, Suit::Spades));
        assert!(is_valid_play(&[c(Rank::Two)], target, None));
        assert!(is_valid_play(&[c(Rank::Ten)], target, None));
    }

    #[test]
    fn test_reset_accepts_anything() {
        let target = Some(Card::new(Rank::Two, Suit::Spades));
        assert!(is_valid_play(&[c(Rank::Three)], target, None));
    }

    #[test]
    fn test_cannot_win_with_wildcard() {
        let ten = c(Rank::Ten);
        let player = seat().with_hand([ten]);
        assert!(!is_valid_play(&[ten], None, Some(&player)));
        // Without the player the rank rule alone passes.
        assert!(is_valid_play(&[ten], None, None));
    }

    #[test]
    fn test_wildcard_fine_when_not_winning() {
        let ten = c(Rank::Ten);
        let player = seat().with_hand([ten]).with_reserve_b([c(Rank::Four)]);
        assert!(is_valid_play(&[ten], None, Some(&player)));
    }

    #[test]
    fn test_winning_play_detection_by_pile() {
        let two = c(Rank::Two);
        let from_a = seat().with_reserve_a([two]);
        assert!(is_winning_play(&from_a, &[two]));

        let from_b = seat().with_reserve_b([two]);
        assert!(is_winning_play(&from_b, &[two]));
        assert!(!is_valid_play(&[two], None, Some(&from_b)));

        let more_left = seat().with_reserve_a([two, c(Rank::Six)]);
        assert!(!is_winning_play(&more_left, &[two]));
    }

    #[test]
    fn test_has_valid_move() {
        let target = Some(Card::new(Rank::Queen, Suit::Spades));
        let weak = seat().with_hand([c(Rank::Three), c(Rank::Four)]);
        assert!(!player_has_valid_move(&weak, target));

        let strong = seat().with_hand([c(Rank::Three), c(Rank::King)]);
        assert!(player_has_valid_move(&strong, target));
    }

    #[test]
    fn test_has_valid_move_uses_reserve_a_after_hand() {
        let target = Some(Card::new(Rank::Queen, Suit::Spades));
        let player = seat().with_reserve_a([c(Rank::Ace)]).with_reserve_b([c(Rank::Three)]);
        assert!(player_has_valid_move(&player, target));
    }

    #[test]
    fn test_blind_seat_always_has_move() {
        let target = Some(Card::new(Rank::Ace, Suit::Spades));
        let player = seat().with_reserve_b([c(Rank::Three)]);
        assert!(player_has_valid_move(&player, target));
    }
}
