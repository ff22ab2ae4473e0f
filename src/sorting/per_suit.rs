use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::cards::{to_numeric, Card};

use super::{SortError, SortStrategy};

/// Sorts by building a [`Card`] record per token, bucketing the records by
/// suit and sorting each bucket on its own task.
pub struct PerSuitSort;

impl Default for PerSuitSort {
    fn default() -> Self {
        Self::new()
    }
}

impl PerSuitSort {
    pub fn new() -> Self {
        Self
    }

    /// Bucket index follows `Suit::position`, so buckets come out in suit order
    fn partition(cards: &[String]) -> Result<[Vec<Card>; 4], SortError> {
        let mut buckets: [Vec<Card>; 4] = Default::default();
        for token in cards {
            let card = Card::from_normalized(&to_numeric(token))?;
            buckets[card.suit.position()].push(card);
        }
        Ok(buckets)
    }
}

#[async_trait]
impl SortStrategy for PerSuitSort {
    #[instrument(skip(self, cards), fields(cards = cards.len()))]
    async fn sort(&self, cards: &mut [String]) -> Result<Duration, SortError> {
        let buckets = Self::partition(cards)?;

        let started = Instant::now();
        let handles = buckets
            .into_iter()
            .map(|mut bucket| {
                tokio::spawn(async move {
                    bucket.sort_by_key(|card| card.rank);
                    bucket
                })
            })
            .collect::<Vec<_>>();

        let sorted = futures::future::join_all(handles)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        let raw = started.elapsed();

        let bucket_sizes: Vec<usize> = sorted.iter().map(Vec::len).collect();
        debug!(
            raw_micros = raw.as_micros() as u64,
            ?bucket_sizes,
            "Suit buckets sorted"
        );

        for (slot, card) in cards.iter_mut().zip(sorted.into_iter().flatten()) {
            *slot = card.token();
        }

        Ok(raw)
    }

    fn strategy_name(&self) -> &'static str {
        "PerSuitSort"
    }
}
