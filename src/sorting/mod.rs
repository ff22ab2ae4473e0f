// Public API
pub use combined::CombinedSort;
pub use errors::SortError;
pub use per_suit::PerSuitSort;
pub use strategy_factory::SortStrategyFactory;
pub use types::{SortStrategy, StrategyKind};

// Internal modules
mod combined;
mod errors;
mod per_suit;
mod strategy_factory;
mod types;
