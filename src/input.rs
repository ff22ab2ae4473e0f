use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::cards::tokenize;

/// Hand used whenever no readable input file is available
pub const FALLBACK_HAND: [&str; 8] = ["3c", "Js", "2d", "10h", "Kh", "8s", "Ac", "4h"];

pub fn fallback_hand() -> Vec<String> {
    FALLBACK_HAND.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NoFile,
    Unreadable { path: PathBuf, message: String },
}

/// Where the hand being sorted came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandSource {
    File(PathBuf),
    Fallback(FallbackReason),
}

impl HandSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, HandSource::Fallback(_))
    }
}

impl fmt::Display for HandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandSource::File(path) => write!(f, "Reading cards from {}", path.display()),
            HandSource::Fallback(FallbackReason::NoFile) => {
                write!(f, "No file given... Using generic input")
            }
            HandSource::Fallback(FallbackReason::Unreadable { message, .. }) => {
                write!(f, "File could not be read.... using generic input.\n{message}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedHand {
    pub cards: Vec<String>,
    pub source: HandSource,
}

/// Reads and tokenizes the hand at `path`, substituting the fallback hand
/// when there is no path or the file cannot be read.
#[instrument]
pub async fn load_hand(path: Option<&Path>) -> LoadedHand {
    let Some(path) = path else {
        info!("No input file given, using fallback hand");
        return LoadedHand {
            cards: fallback_hand(),
            source: HandSource::Fallback(FallbackReason::NoFile),
        };
    };

    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            let cards = tokenize(&text);
            info!(path = %path.display(), cards = cards.len(), "Loaded hand from file");
            LoadedHand {
                cards,
                source: HandSource::File(path.to_path_buf()),
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Input file could not be read, using fallback hand");
            LoadedHand {
                cards: fallback_hand(),
                source: HandSource::Fallback(FallbackReason::Unreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_path_uses_fallback() {
        let hand = load_hand(None).await;

        assert_eq!(hand.cards, fallback_hand());
        assert_eq!(hand.source, HandSource::Fallback(FallbackReason::NoFile));
    }

    #[tokio::test]
    async fn test_missing_file_uses_fallback() {
        let path = std::env::temp_dir().join("cardsort-input-that-does-not-exist.txt");

        let hand = load_hand(Some(&path)).await;

        assert_eq!(hand.cards, fallback_hand());
        match hand.source {
            HandSource::Fallback(FallbackReason::Unreadable { path: p, message }) => {
                assert_eq!(p, path);
                assert!(!message.is_empty());
            }
            other => panic!("Expected unreadable fallback, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reads_and_tokenizes_file() {
        let path = std::env::temp_dir().join(format!("cardsort-input-{}.txt", std::process::id()));
        tokio::fs::write(&path, "Qd, 7s\r\n2h").await.unwrap();

        let hand = load_hand(Some(&path)).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(hand.cards, vec!["Qd", "7s", "2h"]);
        assert_eq!(hand.source, HandSource::File(path));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            HandSource::Fallback(FallbackReason::NoFile).to_string(),
            "No file given... Using generic input"
        );

        let unreadable = HandSource::Fallback(FallbackReason::Unreadable {
            path: PathBuf::from("missing.txt"),
            message: "not found".to_string(),
        });
        assert_eq!(
            unreadable.to_string(),
            "File could not be read.... using generic input.\nnot found"
        );
        assert!(unreadable.is_fallback());
    }
}
