use std::future::Future;
use std::time::{Duration, Instant};

use chrono::TimeDelta;

/// The output of a timed computation together with its wall-clock duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Awaits `fut`, measuring how long it took
pub async fn time_async<F, T>(fut: F) -> Timed<T>
where
    F: Future<Output = T>,
{
    let started = Instant::now();
    let value = fut.await;
    Timed {
        value,
        elapsed: started.elapsed(),
    }
}

/// Renders a duration as `HH:MM:SS.cc` (hundredths of a second, truncated)
pub fn format_elapsed(elapsed: Duration) -> String {
    let delta = TimeDelta::from_std(elapsed).unwrap_or(TimeDelta::MAX);
    let hours = delta.num_hours();
    let minutes = delta.num_minutes() % 60;
    let seconds = delta.num_seconds() % 60;
    let centis = (delta.num_milliseconds() % 1000) / 10;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{centis:02}")
}
