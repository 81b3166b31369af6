//! The four tier strategies.
//!
//! Candidates arrive in enumeration order. Every pick takes the first
//! candidate that is best under the tier's ordering, so ties resolve to the
//! earlier group.

use std::cmp::Ordering;

use crate::cards::Rank;
use crate::core::action::CardGroup;

use super::strategy::{Situation, Strategy};

fn rank(group: &CardGroup) -> Option<Rank> {
    group.first().map(|c| c.rank)
}

fn value(group: &CardGroup) -> u8 {
    group.first().map_or(0, |c| c.value())
}

fn is_special(group: &CardGroup) -> bool {
    group.first().is_some_and(|c| c.is_special())
}

/// First candidate that is minimal under `order`.
fn pick<'a>(
    candidates: impl IntoIterator<Item = &'a CardGroup>,
    order: impl Fn(&CardGroup, &CardGroup) -> Ordering,
) -> Option<CardGroup> {
    candidates
        .into_iter()
        .min_by(|a, b| order(a, b))
        .cloned()
}

fn normal(candidates: &[CardGroup]) -> Vec<&CardGroup> {
    candidates.iter().filter(|g| !is_special(g)).collect()
}

/// A Ten if there is one, else a Two.
fn special_fallback(candidates: &[CardGroup]) -> Option<CardGroup> {
    let find = |wanted| candidates.iter().find(|g| rank(g) == Some(wanted));
    find(Rank::Ten).or_else(|| find(Rank::Two)).cloned()
}

fn lowest_value(a: &CardGroup, b: &CardGroup) -> Ordering {
    value(a).cmp(&value(b))
}

/// Dumps the lowest card, keeping Twos and Tens off an open pile.
#[derive(Clone, Copy, Debug, Default)]
pub struct Easy;

impl Strategy for Easy {
    fn name(&self) -> &'static str {
        "Easy"
    }

    fn select(&self, candidates: &[CardGroup], situation: &Situation) -> Option<CardGroup> {
        let normal = normal(candidates);
        if situation.is_open() && !normal.is_empty() {
            return pick(normal, lowest_value);
        }
        pick(candidates, lowest_value)
    }
}

/// Climbs high under pressure, otherwise sheds low and wide.
#[derive(Clone, Copy, Debug, Default)]
pub struct Medium;

impl Strategy for Medium {
    fn name(&self) -> &'static str {
        "Medium"
    }

    fn select(&self, candidates: &[CardGroup], situation: &Situation) -> Option<CardGroup> {
        let normal = normal(candidates);
        if !normal.is_empty() {
            return if situation.hard_pressure() {
                pick(normal, |a, b| value(b).cmp(&value(a)).then(b.len().cmp(&a.len())))
            } else {
                pick(normal, |a, b| value(a).cmp(&value(b)).then(b.len().cmp(&a.len())))
            };
        }
        special_fallback(candidates)
    }
}

/// Hard and Extreme share one policy with different thresholds and tie
/// breaks.
fn tactical(candidates: &[CardGroup], situation: &Situation, extreme: bool) -> Option<CardGroup> {
    let ten_threshold = if extreme { 3 } else { 5 };
    if situation.mpa_size >= ten_threshold {
        if let Some(ten) = candidates.iter().find(|g| rank(g) == Some(Rank::Ten)) {
            return Some(ten.clone());
        }
    }

    let normal = normal(candidates);
    if !normal.is_empty() {
        let pressured = situation.hard_pressure() || (extreme && situation.extreme_pressure());
        return if pressured {
            // Highest value, spending as few cards as possible.
            pick(normal, |a, b| value(b).cmp(&value(a)).then(a.len().cmp(&b.len())))
        } else if extreme {
            pick(normal, |a, b| value(a).cmp(&value(b)).then(b.len().cmp(&a.len())))
        } else {
            pick(normal, |a, b| value(a).cmp(&value(b)).then(a.len().cmp(&b.len())))
        };
    }

    special_fallback(candidates).or_else(|| candidates.first().cloned())
}

/// Conserves: plays Tens on big piles, splits groups, keeps pairs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hard;

impl Strategy for Hard {
    fn name(&self) -> &'static str {
        "Hard"
    }

    fn select(&self, candidates: &[CardGroup], situation: &Situation) -> Option<CardGroup> {
        tactical(candidates, situation, false)
    }
}

/// Aggressive: reaches for Tens and pressure early, dumps whole groups.
#[derive(Clone, Copy, Debug, Default)]
pub struct Extreme;

impl Strategy for Extreme {
    fn name(&self) -> &'static str {
        "Extreme"
    }

    fn select(&self, candidates: &[CardGroup], situation: &Situation) -> Option<CardGroup> {
        tactical(candidates, situation, true)
    }
}
