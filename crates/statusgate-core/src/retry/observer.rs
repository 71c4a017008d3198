//! Retry observation and logging
//!
//! `RetryObserver` receives a callback at each step of a retry run.
//! `TracingObserver` turns those into `tracing` events.

use std::error::Error;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// Observer trait for retry events
pub trait RetryObserver: Send + Sync {
    /// Called when an attempt is about to start
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt number (1-indexed)
    /// * `max_attempts` - The maximum number of attempts configured
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32);

    /// Called when an attempt reported pending and another will follow
    fn on_pending(&self, attempt: u32, reason: &str, delay: Duration);

    /// Called when an attempt produced a result
    fn on_ready(&self, attempt: u32, total_duration: Duration);

    /// Called when the last allowed attempt was still pending
    fn on_exhausted(&self, attempts: u32, total_duration: Duration);

    /// Called when an attempt failed and the run stops
    fn on_aborted(&self, attempt: u32, error: &dyn Error);
}

/// A no-op observer
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl RetryObserver for NoOpObserver {
    fn on_attempt_start(&self, _attempt: u32, _max_attempts: u32) {}

    fn on_pending(&self, _attempt: u32, _reason: &str, _delay: Duration) {}

    fn on_ready(&self, _attempt: u32, _total_duration: Duration) {}

    fn on_exhausted(&self, _attempts: u32, _total_duration: Duration) {}

    fn on_aborted(&self, _attempt: u32, _error: &dyn Error) {}
}

/// An observer that logs retry events using the `tracing` crate
///
/// # Log Levels
///
/// - `on_attempt_start`: DEBUG
/// - `on_pending`: INFO
/// - `on_ready`: DEBUG
/// - `on_exhausted`: DEBUG
/// - `on_aborted`: ERROR
#[derive(Debug, Clone)]
pub struct TracingObserver {
    /// Name of the operation being retried (for log context)
    operation: String,
}

impl TracingObserver {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }

    /// Get the operation name
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new("poll")
    }
}

impl RetryObserver for TracingObserver {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        tracing::debug!(
            operation = %self.operation,
            attempt = attempt,
            max_attempts = max_attempts,
            "starting attempt"
        );
    }

    fn on_pending(&self, attempt: u32, reason: &str, delay: Duration) {
        tracing::info!(
            operation = %self.operation,
            attempt = attempt,
            reason = %reason,
            delay_ms = delay.as_millis() as u64,
            "not ready yet, waiting"
        );
    }

    fn on_ready(&self, attempt: u32, total_duration: Duration) {
        tracing::debug!(
            operation = %self.operation,
            attempt = attempt,
            total_duration_ms = total_duration.as_millis() as u64,
            "ready"
        );
    }

    fn on_exhausted(&self, attempts: u32, total_duration: Duration) {
        tracing::debug!(
            operation = %self.operation,
            attempts = attempts,
            total_duration_ms = total_duration.as_millis() as u64,
            "retry budget spent"
        );
    }

    fn on_aborted(&self, attempt: u32, error: &dyn Error) {
        tracing::error!(
            operation = %self.operation,
            attempt = attempt,
            error = %error,
            "attempt failed, giving up"
        );
    }
}

/// An observer that counts retry events
///
/// Useful for testing.
#[derive(Debug, Default)]
pub struct StatsObserver {
    pub attempt_starts: AtomicU32,
    pub pendings: AtomicU32,
    pub readies: AtomicU32,
    pub exhaustions: AtomicU32,
    pub aborts: AtomicU32,
}

impl StatsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempt_starts(&self) -> u32 {
        self.attempt_starts.load(Ordering::SeqCst)
    }

    pub fn pendings(&self) -> u32 {
        self.pendings.load(Ordering::SeqCst)
    }

    pub fn readies(&self) -> u32 {
        self.readies.load(Ordering::SeqCst)
    }

    pub fn exhaustions(&self) -> u32 {
        self.exhaustions.load(Ordering::SeqCst)
    }

    pub fn aborts(&self) -> u32 {
        self.aborts.load(Ordering::SeqCst)
    }
}

impl RetryObserver for StatsObserver {
    fn on_attempt_start(&self, _attempt: u32, _max_attempts: u32) {
        self.attempt_starts.fetch_add(1, Ordering::SeqCst);
    }

    fn on_pending(&self, _attempt: u32, _reason: &str, _delay: Duration) {
        self.pendings.fetch_add(1, Ordering::SeqCst);
    }

    fn on_ready(&self, _attempt: u32, _total_duration: Duration) {
        self.readies.fetch_add(1, Ordering::SeqCst);
    }

    fn on_exhausted(&self, _attempts: u32, _total_duration: Duration) {
        self.exhaustions.fetch_add(1, Ordering::SeqCst);
    }

    fn on_aborted(&self, _attempt: u32, _error: &dyn Error) {
        self.aborts.fetch_add(1, Ordering::SeqCst);
    }
}

/// Implement RetryObserver for Arc<T> where T: RetryObserver
impl<T: RetryObserver + ?Sized> RetryObserver for std::sync::Arc<T> {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        (**self).on_attempt_start(attempt, max_attempts)
    }

    fn on_pending(&self, attempt: u32, reason: &str, delay: Duration) {
        (**self).on_pending(attempt, reason, delay)
    }

    fn on_ready(&self, attempt: u32, total_duration: Duration) {
        (**self).on_ready(attempt, total_duration)
    }

    fn on_exhausted(&self, attempts: u32, total_duration: Duration) {
        (**self).on_exhausted(attempts, total_duration)
    }

    fn on_aborted(&self, attempt: u32, error: &dyn Error) {
        (**self).on_aborted(attempt, error)
    }
}

/// Implement RetryObserver for &T so a borrowed observer can drive an executor
impl<T: RetryObserver + ?Sized> RetryObserver for &T {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        (**self).on_attempt_start(attempt, max_attempts)
    }

    fn on_pending(&self, attempt: u32, reason: &str, delay: Duration) {
        (**self).on_pending(attempt, reason, delay)
    }

    fn on_ready(&self, attempt: u32, total_duration: Duration) {
        (**self).on_ready(attempt, total_duration)
    }

    fn on_exhausted(&self, attempts: u32, total_duration: Duration) {
        (**self).on_exhausted(attempts, total_duration)
    }

    fn on_aborted(&self, attempt: u32, error: &dyn Error) {
        (**self).on_aborted(attempt, error)
    }
}
