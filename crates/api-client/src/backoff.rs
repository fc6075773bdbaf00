//! Retry delay policy.
//!
//! Linear backoff per page: the first retry waits the initial interval and
//! every later retry waits a fixed increment more. A failure body carrying a
//! numeric `retry_after` (seconds) overrides the computed delay for that
//! attempt, but the interval still advances.

use serde_json::Value;
use std::time::Duration;

const RETRY_AFTER_KEY: &str = "retry_after";

/// Linearly growing retry interval for one page's retry loop.
#[derive(Debug)]
pub struct Backoff {
    interval: Duration,
    increment: Duration,
}

impl Backoff {
    pub fn new(initial: Duration, increment: Duration) -> Self {
        Self {
            interval: initial,
            increment,
        }
    }

    /// The delay to use for the next retry.
    pub fn current(&self) -> Duration {
        self.interval
    }

    /// Grow the interval. Called after every retry, including
    /// server-directed ones.
    pub fn advance(&mut self) {
        self.interval += self.increment;
    }
}

/// Extracts a server-directed backoff from a failure body, if present.
///
/// Only a top-level numeric `retry_after` counts; a string value is ignored
/// and the caller falls back to the linear interval.
pub fn retry_after(body: &Value) -> Option<Duration> {
    let seconds = body.get(RETRY_AFTER_KEY)?.as_f64()?;
    if seconds.is_finite() && seconds >= 0.0 {
        Some(Duration::from_secs_f64(seconds))
    } else {
        None
    }
}
