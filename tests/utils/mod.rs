pub mod assertions;
pub mod hand_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::{assert_canonical_order, suit_runs};
pub use hand_builders::HandBuilder;
