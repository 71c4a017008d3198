//! Error types for the retry engine

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Why a retry run ended without a result
///
/// Generic over `E`, the error type of the attempt being retried.
#[derive(Debug)]
pub enum RetryError<E> {
    /// Every attempt reported pending
    Exhausted {
        /// Number of attempts made before giving up
        attempts: u32,
        /// Total time spent across all attempts
        total_duration: Duration,
        /// Reason given by the final attempt
        last_reason: String,
    },

    /// An attempt failed; no further attempts were made
    Aborted {
        /// Which attempt failed (1-indexed)
        attempt: u32,
        /// The error from that attempt
        source: E,
    },
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Exhausted {
                attempts,
                total_duration,
                last_reason,
            } => write!(
                f,
                "gave up after {} attempts over {:.2}s: {}",
                attempts,
                total_duration.as_secs_f64(),
                last_reason
            ),
            RetryError::Aborted { attempt, source } => {
                write!(f, "attempt {} failed: {}", attempt, source)
            }
        }
    }
}

impl<E: Error + 'static> Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RetryError::Aborted { source, .. } => Some(source),
            RetryError::Exhausted { .. } => None,
        }
    }
}

impl<E> RetryError<E> {
    /// Create a new exhausted error
    pub fn exhausted(attempts: u32, total_duration: Duration, last_reason: impl Into<String>) -> Self {
        RetryError::Exhausted {
            attempts,
            total_duration,
            last_reason: last_reason.into(),
        }
    }

    /// Create a new aborted error
    pub fn aborted(attempt: u32, source: E) -> Self {
        RetryError::Aborted { attempt, source }
    }
}
