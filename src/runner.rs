use std::fmt;
use std::time::Duration;

use tracing::{info, instrument};

use crate::config::Config;
use crate::input::{load_hand, HandSource};
use crate::shared::AppError;
use crate::sorting::{SortError, SortStrategyFactory, StrategyKind};
use crate::timing::{format_elapsed, time_async};

/// What one strategy did to one copy of the deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    pub kind: StrategyKind,
    pub before: Vec<String>,
    pub after: Vec<String>,
    /// Whole strategy call, normalization and reassembly included
    pub elapsed: Duration,
    /// Sort proper only
    pub raw: Duration,
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Starting {} implementation...", self.kind)?;
        writeln!(f, "Deck before sorting:")?;
        writeln!(f, "{}", self.before.join(" "))?;
        writeln!(
            f,
            "{} implementation ran in: {}",
            self.kind,
            format_elapsed(self.elapsed)
        )?;
        writeln!(f, "Raw {} sorting time: {}", self.kind, format_elapsed(self.raw))?;
        writeln!(f, "Deck after {} sort:", self.kind)?;
        write!(f, "{}", self.after.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub source: HandSource,
    pub reports: Vec<StrategyReport>,
}

/// Sorts a private copy of `cards` with the strategy of the given kind
#[instrument(skip(cards), fields(cards = cards.len()))]
pub async fn run_strategy(
    kind: StrategyKind,
    cards: &[String],
) -> Result<StrategyReport, SortError> {
    let strategy = SortStrategyFactory::create_strategy(kind);
    let mut deck = cards.to_vec();

    let timed = time_async(strategy.sort(&mut deck)).await;
    let raw = timed.value?;

    info!(
        strategy = strategy.strategy_name(),
        elapsed = %format_elapsed(timed.elapsed),
        raw = %format_elapsed(raw),
        "Strategy finished"
    );

    Ok(StrategyReport {
        kind,
        before: cards.to_vec(),
        after: deck,
        elapsed: timed.elapsed,
        raw,
    })
}

/// Loads the configured hand and runs every selected strategy over it
pub async fn run(config: &Config) -> Result<RunOutcome, AppError> {
    let hand = load_hand(config.input.as_deref()).await;

    let mut reports = Vec::new();
    for kind in config.strategy.kinds() {
        reports.push(run_strategy(kind, &hand.cards).await?);
    }

    Ok(RunOutcome {
        source: hand.source,
        reports,
    })
}
