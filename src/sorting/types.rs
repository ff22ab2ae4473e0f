use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::SortError;

/// The sorting strategies a deck can be run through
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Card records bucketed by suit, one task per bucket
    PerSuit,
    /// One grouped sort over the tokens themselves
    Combined,
}

impl StrategyKind {
    pub fn all() -> [StrategyKind; 2] {
        [StrategyKind::PerSuit, StrategyKind::Combined]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::PerSuit => write!(f, "per-suit"),
            StrategyKind::Combined => write!(f, "combined"),
        }
    }
}

/// Trait for deck sorting strategies.
///
/// A strategy rewrites `cards` so that tokens are grouped by suit in the
/// order diamonds, spades, clubs, hearts and ascend by rank within a suit.
/// Face cards keep their letter form in the result. On error the deck is
/// left as it was.
#[async_trait]
pub trait SortStrategy: Send + Sync {
    /// Sort the deck in place, returning the time spent in the sort proper
    async fn sort(&self, cards: &mut [String]) -> Result<Duration, SortError>;

    /// Get the name of this strategy
    fn strategy_name(&self) -> &'static str;
}
