//! AI opponents.
//!
//! ## Pipeline
//!
//! 1. Enumerate legal candidate groups from the active pile (`candidates`).
//!    Easy and Medium see whole rank groups, Hard and Extreme also see
//!    partial groups.
//! 2. Hand them to the tier's `Strategy`, looked up in a static table.
//!
//! A blind seat has nothing to reason about: it turns over a uniformly
//! random reserve B card whatever the tier.
//!
//! An empty selection means the seat must eat. Strategies only ever pick
//! from validated candidates, so a non-empty selection is always legal.

pub mod autoplay;
pub mod candidates;
pub mod opening;
pub mod strategy;
mod tiers;

pub use autoplay::play_out;
pub use candidates::{candidate_plays, get_all_possible_plays};
pub use opening::get_ai_starting_card;
pub use strategy::{strategy_for, Situation, Strategy};
pub use tiers::{Easy, Extreme, Hard, Medium};

use crate::cards::Card;
use crate::core::action::Action;
use crate::core::config::Difficulty;
use crate::core::player::Player;
use crate::core::rng::GameRng;

/// Cards the AI would play, or empty if it must eat.
#[must_use]
pub fn get_ai_play(
    player: &Player,
    target: Option<Card>,
    mpa_size: usize,
    deck_size: usize,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Vec<Card> {
    if player.is_blind() {
        return rng.choose(player.reserve_b()).into_iter().copied().collect();
    }

    let candidates = get_all_possible_plays(player, target, difficulty);
    let situation = Situation {
        target,
        mpa_size,
        deck_size,
    };
    strategy_for(difficulty)
        .select(&candidates, &situation)
        .map(|group| group.to_vec())
        .unwrap_or_default()
}

/// The AI's decision as a complete action.
#[must_use]
pub fn choose_action(
    player: &Player,
    target: Option<Card>,
    mpa_size: usize,
    deck_size: usize,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Action {
    if player.is_blind() && !player.reserve_b().is_empty() {
        return Action::Reveal(rng.gen_index(player.reserve_b().len()));
    }
    let play = get_ai_play(player, target, mpa_size, deck_size, difficulty, rng);
    if play.is_empty() {
        Action::Eat
    } else {
        Action::play(&play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::player::PlayerId;
    use crate::rules::validator::is_valid_play;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_easy_plays_king_over_nine() {
        let player = Player::new(PlayerId::new(1), "Bot", true).with_hand([
            c(Rank::Eight, Suit::Spades),
            c(Rank::Eight, Suit::Hearts),
            c(Rank::King, Suit::Clubs),
        ]);
        let mut rng = GameRng::new(1);
        let play = get_ai_play(
            &player,
            Some(c(Rank::Nine, Suit::Diamonds)),
            1,
            20,
            Difficulty::Easy,
            &mut rng,
        );
        assert_eq!(play, vec![c(Rank::King, Suit::Clubs)]);
    }

    #[test]
    fn test_empty_means_eat() {
        let player = Player::new(PlayerId::new(1), "Bot", true)
            .with_hand([c(Rank::Three, Suit::Spades)]);
        let target = Some(c(Rank::Ace, Suit::Diamonds));
        let mut rng = GameRng::new(1);

        for difficulty in Difficulty::ALL {
            assert!(get_ai_play(&player, target, 1, 20, difficulty, &mut rng).is_empty());
            assert_eq!(
                choose_action(&player, target, 1, 20, difficulty, &mut rng),
                Action::Eat
            );
        }
    }

    #[test]
    fn test_blind_picks_from_reserve_b() {
        let reserve = [c(Rank::Three, Suit::Spades), c(Rank::Ace, Suit::Spades)];
        let player = Player::new(PlayerId::new(1), "Bot", true).with_reserve_b(reserve);
        let mut rng = GameRng::new(5);

        for _ in 0..10 {
            let play = get_ai_play(&player, None, 0, 0, Difficulty::Extreme, &mut rng);
            assert_eq!(play.len(), 1);
            assert!(reserve.contains(&play[0]));

            match choose_action(&player, None, 0, 0, Difficulty::Easy, &mut rng) {
                Action::Reveal(i) => assert!(i < reserve.len()),
                other => panic!("unexpected action {other:?}"),
            }
        }
    }

    #[test]
    fn test_selection_is_legal() {
        let player = Player::new(PlayerId::new(1), "Bot", true).with_hand([
            c(Rank::Two, Suit::Spades),
            c(Rank::Six, Suit::Spades),
            c(Rank::Six, Suit::Hearts),
            c(Rank::Queen, Suit::Clubs),
        ]);
        let target = Some(c(Rank::Five, Suit::Diamonds));
        let mut rng = GameRng::new(3);

        for difficulty in Difficulty::ALL {
            for mpa_size in 1..8 {
                let play = get_ai_play(&player, target, mpa_size, 5, difficulty, &mut rng);
                assert!(is_valid_play(&play, target, Some(&player)), "{difficulty}: {play:?}");
            }
        }
    }
}
