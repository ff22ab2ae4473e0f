//! Hand builders - deterministic decks for workflow tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use cardsort::cards::{to_face, Card, MAX_RANK, MIN_RANK};
use cardsort::Suit;
use strum::IntoEnumIterator;

#[macro_export]
macro_rules! hand {
    ($($token:literal),* $(,)?) => {
        vec![$($token.to_string()),*]
    };
}

pub struct HandBuilder {
    cards: Vec<String>,
}

impl HandBuilder {
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    /// Every card of a standard deck, dealt suit by suit in ascending rank
    pub fn with_full_deck(mut self) -> Self {
        for suit in Suit::iter() {
            for rank in MIN_RANK..=MAX_RANK {
                self.cards.push(token(rank, suit));
            }
        }
        self
    }

    pub fn with_tokens(mut self, tokens: &[&str]) -> Self {
        self.cards.extend(tokens.iter().map(|t| t.to_string()));
        self
    }

    /// Appends `copies` duplicates of the current deck
    pub fn repeated(mut self, copies: usize) -> Self {
        let original = self.cards.clone();
        for _ in 0..copies {
            self.cards.extend(original.iter().cloned());
        }
        self
    }

    pub fn reversed(mut self) -> Self {
        self.cards.reverse();
        self
    }

    /// Deterministic interleave: takes every `stride`-th card, wrapping around
    pub fn interleaved(self, stride: usize) -> Self {
        let len = self.cards.len();
        let cards = (0..len)
            .map(|i| self.cards[(i * stride) % len].clone())
            .collect();
        Self { cards }
    }

    pub fn build(self) -> Vec<String> {
        self.cards
    }
}

/// Numeric rank of a face-form token
pub fn rank_of(token: &str) -> u8 {
    let numeric = cardsort::cards::to_numeric(token);
    Card::from_normalized(&numeric)
        .map(|card| card.rank)
        .unwrap_or_else(|e| panic!("{token} is not a valid card: {e}"))
}

/// Face-form token for a numeric rank and suit
pub fn token(rank: u8, suit: Suit) -> String {
    to_face(&format!("{rank}{suit}"))
}
