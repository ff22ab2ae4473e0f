// Library crate for the card sorter
// This file exposes the public API for the binary and integration tests

pub mod cards;
pub mod config;
pub mod input;
pub mod runner;
pub mod shared;
pub mod sorting;
pub mod timing;

// Re-export commonly used types for easier access in tests
pub use cards::{Card, Suit};
pub use config::{Config, StrategySelection};
pub use input::{load_hand, HandSource, LoadedHand};
pub use runner::{run, run_strategy, RunOutcome, StrategyReport};
pub use shared::AppError;
pub use sorting::{SortError, SortStrategy, SortStrategyFactory, StrategyKind};
