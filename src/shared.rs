use thiserror::Error;

use crate::sorting::SortError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Sorting failed: {0}")]
    Sort(#[from] SortError),
}
