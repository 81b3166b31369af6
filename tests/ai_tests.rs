//! AI tests.
//!
//! These tests verify each tier's selection policy:
//! - Easy and Medium see whole rank groups only
//! - Hard and Extreme split groups and spend Tens on big piles
//! - Pressure thresholds switch from shedding low to climbing high
//! - The engine commits the AI's choice like any other action

mod common;

use common::{c, init_logging, P0, P1};
use quatch::ai::{
    self, get_ai_starting_card, get_all_possible_plays, strategy_for, Situation, Strategy,
};
use quatch::{
    CardGroup, Difficulty, GameBuilder, Player, Rank, SeatLayout, Suit, TableLayout, TurnEvent,
};

fn bot(hand: &[quatch::Card]) -> Player {
    Player::new(P1, "Bot", true).with_hand(hand.iter().copied())
}

/// Hand used by most tier tests: a pair of Sixes, a Queen and a Ten.
fn mixed_hand() -> Player {
    bot(&[
        c(Rank::Six, Suit::Spades),
        c(Rank::Six, Suit::Hearts),
        c(Rank::Queen, Suit::Clubs),
        c(Rank::Ten, Suit::Diamonds),
    ])
}

fn select(player: &Player, difficulty: Difficulty, mpa_size: usize, deck_size: usize) -> CardGroup {
    let target = Some(c(Rank::Five, Suit::Clubs));
    let candidates = get_all_possible_plays(player, target, difficulty);
    let situation = Situation {
        target,
        mpa_size,
        deck_size,
    };
    strategy_for(difficulty)
        .select(&candidates, &situation)
        .expect("the mixed hand always has a play")
}

fn ranks(group: &CardGroup) -> Vec<Rank> {
    group.iter().map(|c| c.rank).collect()
}

/// Test Easy answers a Nine with the King rather than holding it.
#[test]
fn test_easy_king_over_nine() {
    init_logging();
    let layout = TableLayout::new()
        .with_seat(
            P0,
            SeatLayout::new().with_hand([
                c(Rank::Eight, Suit::Spades),
                c(Rank::Eight, Suit::Hearts),
                c(Rank::King, Suit::Clubs),
            ]),
        )
        .with_seat(P1, SeatLayout::new().with_hand([c(Rank::Three, Suit::Hearts)]))
        .with_mpa([c(Rank::Nine, Suit::Diamonds)]);
    let mut state = GameBuilder::new()
        .difficulty(Difficulty::Easy)
        .seed(11)
        .arrange(layout)
        .unwrap();

    let outcome = state.take_ai_turn().unwrap();

    match outcome.event {
        TurnEvent::Played { ref cards, .. } => {
            assert_eq!(cards.as_slice(), &[c(Rank::King, Suit::Clubs)]);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(state.target_card(), Some(c(Rank::King, Suit::Clubs)));
}

/// Test Easy keeps wildcards off an open pile.
#[test]
fn test_easy_open_pile_avoids_specials() {
    let player = bot(&[
        c(Rank::Two, Suit::Spades),
        c(Rank::Seven, Suit::Hearts),
        c(Rank::Ten, Suit::Clubs),
    ]);
    let candidates = get_all_possible_plays(&player, None, Difficulty::Easy);
    let situation = Situation {
        target: None,
        mpa_size: 0,
        deck_size: 20,
    };
    let pick = strategy_for(Difficulty::Easy).select(&candidates, &situation).unwrap();
    assert_eq!(ranks(&pick), vec![Rank::Seven]);

    // Easy sheds its lowest card otherwise.
    assert_eq!(ranks(&select(&mixed_hand(), Difficulty::Easy, 1, 20)), vec![Rank::Six; 2]);
}

/// Test Medium sheds wide when calm and climbs when pressured.
#[test]
fn test_medium_pressure() {
    let player = mixed_hand();
    assert_eq!(ranks(&select(&player, Difficulty::Medium, 1, 20)), vec![Rank::Six; 2]);
    assert_eq!(ranks(&select(&player, Difficulty::Medium, 5, 20)), vec![Rank::Queen]);
    assert_eq!(ranks(&select(&player, Difficulty::Medium, 3, 10)), vec![Rank::Queen]);
}

/// Test Medium falls back to a Ten before a Two.
#[test]
fn test_medium_special_fallback() {
    let player = bot(&[c(Rank::Two, Suit::Spades), c(Rank::Ten, Suit::Clubs)]);
    let pick = select(&player, Difficulty::Medium, 1, 20);
    assert_eq!(ranks(&pick), vec![Rank::Ten]);
}

/// Test Hard splits pairs and spends a Ten only on a big pile.
#[test]
fn test_hard_choices() {
    let player = mixed_hand();
    assert_eq!(ranks(&select(&player, Difficulty::Hard, 1, 20)), vec![Rank::Six]);
    assert_eq!(ranks(&select(&player, Difficulty::Hard, 3, 10)), vec![Rank::Queen]);
    assert_eq!(ranks(&select(&player, Difficulty::Hard, 4, 20)), vec![Rank::Six]);
    assert_eq!(ranks(&select(&player, Difficulty::Hard, 5, 20)), vec![Rank::Ten]);
}

/// Test Extreme's lower thresholds and wide shedding.
#[test]
fn test_extreme_choices() {
    let player = mixed_hand();
    assert_eq!(ranks(&select(&player, Difficulty::Extreme, 1, 20)), vec![Rank::Six; 2]);
    assert_eq!(ranks(&select(&player, Difficulty::Extreme, 2, 15)), vec![Rank::Queen]);
    assert_eq!(ranks(&select(&player, Difficulty::Extreme, 3, 20)), vec![Rank::Ten]);
}

/// Test only Hard and Extreme see partial groups.
#[test]
fn test_partial_groups_by_tier() {
    let player = mixed_hand();
    let target = Some(c(Rank::Five, Suit::Clubs));
    let has_single_six = |difficulty| {
        get_all_possible_plays(&player, target, difficulty)
            .iter()
            .any(|g| g.len() == 1 && g[0].rank == Rank::Six)
    };
    assert!(!has_single_six(Difficulty::Easy));
    assert!(!has_single_six(Difficulty::Medium));
    assert!(has_single_six(Difficulty::Hard));
    assert!(has_single_six(Difficulty::Extreme));
}

/// Test the tier table covers every difficulty in order.
#[test]
fn test_tier_table() {
    let names: Vec<_> = ai::strategy::tiers().iter().map(|t| t.strategy.name()).collect();
    assert_eq!(names, ["Easy", "Medium", "Hard", "Extreme"]);
    for (tier, difficulty) in ai::strategy::tiers().iter().zip(Difficulty::ALL) {
        assert_eq!(tier.difficulty, difficulty);
        assert_eq!(strategy_for(difficulty).name(), tier.strategy.name());
    }
}

/// Test the opening choice is the lowest non-special group.
#[test]
fn test_opening_choice() {
    let player = bot(&[
        c(Rank::Two, Suit::Spades),
        c(Rank::Four, Suit::Hearts),
        c(Rank::Four, Suit::Clubs),
    ]);
    assert_eq!(
        get_ai_starting_card(&player),
        vec![c(Rank::Four, Suit::Hearts), c(Rank::Four, Suit::Clubs)]
    );

    let specials = bot(&[c(Rank::Two, Suit::Spades), c(Rank::Ten, Suit::Clubs)]);
    assert!(get_ai_starting_card(&specials).is_empty());
}
