use std::process::ExitCode;

use cardsort::{run, Config};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the decks
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardsort=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    info!(input = ?config.input, strategy = ?config.strategy, "Starting card sorter");

    match run(&config).await {
        Ok(outcome) => {
            if outcome.source.is_fallback() {
                println!("{}", outcome.source);
            }
            for report in &outcome.reports {
                println!("{report}\n");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Card sort failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
