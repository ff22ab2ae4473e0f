use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::cards::{denormalize_all, normalize_all, to_numeric, Card, Suit};

use super::{SortError, SortStrategy};

/// Sorts the token strings directly with a single grouped sort, without
/// building card records.
pub struct CombinedSort;

impl Default for CombinedSort {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinedSort {
    pub fn new() -> Self {
        Self
    }
}

/// Sort key of a normalized token: suit position first, then numeric rank.
/// Only meaningful for tokens that already passed validation.
fn sort_key(token: &str) -> (usize, u8) {
    let suit = Suit::of_token(token).map_or(usize::MAX, Suit::position);
    let rank = token
        .char_indices()
        .last()
        .and_then(|(split, _)| token[..split].parse::<u8>().ok())
        .unwrap_or(u8::MAX);
    (suit, rank)
}

#[async_trait]
impl SortStrategy for CombinedSort {
    #[instrument(skip(self, cards), fields(cards = cards.len()))]
    async fn sort(&self, cards: &mut [String]) -> Result<Duration, SortError> {
        for token in cards.iter() {
            Card::from_normalized(&to_numeric(token))?;
        }

        normalize_all(cards);

        let started = Instant::now();
        cards.sort_by_key(|token| sort_key(token));
        let raw = started.elapsed();

        debug!(raw_micros = raw.as_micros() as u64, "Grouped sort finished");

        denormalize_all(cards);
        Ok(raw)
    }

    fn strategy_name(&self) -> &'static str {
        "CombinedSort"
    }
}
