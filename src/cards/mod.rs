pub mod basic;
pub mod normalize;
pub mod tokenize;

pub use basic::{Card, CardError, Suit, MAX_RANK, MIN_RANK};
pub use normalize::{denormalize_all, normalize_all, to_face, to_numeric};
pub use tokenize::tokenize;
