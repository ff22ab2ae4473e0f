use std::sync::Arc;

use super::{
    combined::CombinedSort,
    per_suit::PerSuitSort,
    types::{SortStrategy, StrategyKind},
};

/// Factory for creating sort strategies by kind
pub struct SortStrategyFactory;

impl SortStrategyFactory {
    pub fn create_strategy(kind: StrategyKind) -> Arc<dyn SortStrategy> {
        match kind {
            StrategyKind::PerSuit => Arc::new(PerSuitSort::new()),
            StrategyKind::Combined => Arc::new(CombinedSort::new()),
        }
    }
}
