use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::sorting::StrategyKind;

/// Which strategies a run exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategySelection {
    #[default]
    All,
    PerSuit,
    Combined,
}

impl StrategySelection {
    /// Strategies in the order they run: per-suit before combined
    pub fn kinds(self) -> Vec<StrategyKind> {
        match self {
            StrategySelection::All => StrategyKind::all().to_vec(),
            StrategySelection::PerSuit => vec![StrategyKind::PerSuit],
            StrategySelection::Combined => vec![StrategyKind::Combined],
        }
    }
}

#[derive(Debug, Clone, Default, Parser)]
#[command(author, version, about = "Sort playing-card tokens by suit and rank", long_about = None)]
pub struct Config {
    /// Text file of card tokens; the built-in hand is used when absent or unreadable
    #[arg(env = "CARDSORT_INPUT")]
    pub input: Option<PathBuf>,

    /// Sorting strategy to run
    #[arg(long, short, value_enum, default_value_t = StrategySelection::All)]
    pub strategy: StrategySelection,
}
