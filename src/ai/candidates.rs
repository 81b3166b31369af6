//! Candidate play enumeration shared by every tier.
//!
//! The active pile is grouped by rank in order of first appearance. Easy
//! and Medium consider each whole rank group; Hard and Extreme also
//! consider every prefix of a group, so they can split a pair or triple.
//! Only groups that pass the validator are returned.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Rank};
use crate::core::action::CardGroup;
use crate::core::config::Difficulty;
use crate::core::player::Player;
use crate::rules::escalation::active_source;
use crate::rules::validator::is_valid_play;

/// Group cards by rank, keeping the order in which ranks first appear.
#[must_use]
pub fn rank_groups(pile: &[Card]) -> Vec<CardGroup> {
    let mut index: FxHashMap<Rank, usize> = FxHashMap::default();
    let mut groups: Vec<CardGroup> = Vec::new();
    for &card in pile {
        let slot = *index.entry(card.rank).or_insert_with(|| {
            groups.push(CardGroup::new());
            groups.len() - 1
        });
        groups[slot].push(card);
    }
    groups
}

/// Legal plays from the seat's active pile.
///
/// Empty for a blind seat: reserve B is never enumerated.
#[must_use]
pub fn candidate_plays(player: &Player, target: Option<Card>, partial: bool) -> Vec<CardGroup> {
    if player.is_blind() {
        return Vec::new();
    }
    let pile = player.pile(active_source(player));

    let mut plays = Vec::new();
    for group in rank_groups(pile) {
        if partial {
            for len in 1..=group.len() {
                let prefix = &group[..len];
                if is_valid_play(prefix, target, Some(player)) {
                    plays.push(CardGroup::from_slice(prefix));
                }
            }
        } else if is_valid_play(&group, target, Some(player)) {
            plays.push(group);
        }
    }
    plays
}

/// Candidate plays as seen by the given tier.
#[must_use]
pub fn get_all_possible_plays(
    player: &Player,
    target: Option<Card>,
    difficulty: Difficulty,
) -> Vec<CardGroup> {
    candidate_plays(player, target, difficulty.allows_partial_groups())
}
