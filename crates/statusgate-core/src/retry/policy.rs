//! Retry policy and per-attempt results

use std::time::Duration;

/// How many attempts to make and how long to wait between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Treated as at least 1.
    pub max_attempts: u32,

    /// Fixed delay between attempts in milliseconds
    pub interval_ms: u64,
}

impl RetryPolicy {
    /// Build a policy from a retry count (retries after the first attempt)
    pub fn from_retry_count(retry_count: u32, interval: Duration) -> Self {
        Self {
            max_attempts: retry_count.saturating_add(1),
            interval_ms: u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Attempts the executor will actually make
    pub fn effective_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 11,
            interval_ms: 5000,
        }
    }
}

/// Calculate the delay before the next attempt
///
/// The interval never grows between attempts.
///
/// ```rust
/// use statusgate_core::retry::{calculate_delay, RetryPolicy};
///
/// let policy = RetryPolicy { max_attempts: 3, interval_ms: 1500 };
/// assert_eq!(calculate_delay(&policy).as_millis(), 1500);
/// ```
pub fn calculate_delay(policy: &RetryPolicy) -> Duration {
    Duration::from_millis(policy.interval_ms)
}

/// Result of a single attempt that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt<T> {
    /// Done; stop retrying and return the value
    Ready(T),

    /// Not there yet; try again if the budget allows
    Pending(String),
}

impl<T> Attempt<T> {
    pub fn pending(reason: impl Into<String>) -> Self {
        Attempt::Pending(reason.into())
    }
}
