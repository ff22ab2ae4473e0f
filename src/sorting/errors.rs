use thiserror::Error;

use crate::cards::CardError;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("Invalid card: {0}")]
    InvalidCard(#[from] CardError),

    #[error("Suit sort task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
