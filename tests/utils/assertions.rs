//! Test assertion helpers for sorted decks
#![allow(dead_code)] // Test utilities may not all be used in every test

use cardsort::Suit;

use super::hand_builders::rank_of;

/// Collapses a deck into its consecutive runs of one suit
pub fn suit_runs(cards: &[String]) -> Vec<(Suit, Vec<u8>)> {
    let mut runs: Vec<(Suit, Vec<u8>)> = vec![];
    for token in cards {
        let suit = Suit::of_token(token).unwrap_or_else(|| panic!("{token} has no valid suit"));
        let rank = rank_of(token);
        match runs.last_mut() {
            Some((current, ranks)) if *current == suit => ranks.push(rank),
            _ => runs.push((suit, vec![rank])),
        }
    }
    runs
}

/// Asserts the deck is grouped d, s, c, h with ascending ranks inside each group
pub fn assert_canonical_order(cards: &[String]) {
    let runs = suit_runs(cards);

    for pair in runs.windows(2) {
        assert!(
            pair[0].0 < pair[1].0,
            "suit {} appears after {} in {:?}",
            pair[1].0,
            pair[0].0,
            cards
        );
    }

    for (suit, ranks) in &runs {
        assert!(
            ranks.windows(2).all(|w| w[0] <= w[1]),
            "ranks of suit {} are not ascending: {:?}",
            suit,
            ranks
        );
    }
}
