//! Retry execution engine

use std::error::Error;
use std::future::Future;

use tokio::time::Instant;

use super::error::RetryError;
use super::observer::{NoOpObserver, RetryObserver};
use super::policy::{calculate_delay, Attempt, RetryPolicy};

/// Builder for configuring a `RetryExecutor`
///
/// # Example
///
/// ```rust
/// use statusgate_core::retry::{RetryExecutorBuilder, RetryPolicy, TracingObserver};
///
/// let executor = RetryExecutorBuilder::new()
///     .with_policy(RetryPolicy { max_attempts: 4, interval_ms: 1000 })
///     .with_observer(TracingObserver::new("commit status"))
///     .build();
/// ```
pub struct RetryExecutorBuilder<O = NoOpObserver> {
    policy: RetryPolicy,
    observer: O,
}

impl Default for RetryExecutorBuilder<NoOpObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryExecutorBuilder<NoOpObserver> {
    pub fn new() -> Self {
        Self {
            policy: RetryPolicy::default(),
            observer: NoOpObserver,
        }
    }
}

impl<O> RetryExecutorBuilder<O> {
    /// Set the retry policy
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the observer
    pub fn with_observer<O2>(self, observer: O2) -> RetryExecutorBuilder<O2> {
        RetryExecutorBuilder {
            policy: self.policy,
            observer,
        }
    }

    pub fn build(self) -> RetryExecutor<O> {
        RetryExecutor {
            policy: self.policy,
            observer: self.observer,
        }
    }
}

/// A retry executor with a fixed-interval policy and an observer
pub struct RetryExecutor<O> {
    policy: RetryPolicy,
    observer: O,
}

impl<O> RetryExecutor<O>
where
    O: RetryObserver,
{
    /// Execute `op` until it is ready, fails, or the budget is spent
    ///
    /// Sleeps the policy interval between pending attempts. No sleep
    /// follows the final attempt.
    pub async fn execute<F, Fut, T, E>(&self, mut op: F) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Attempt<T>, E>>,
        E: Error + Send + 'static,
    {
        let start = Instant::now();
        let max_attempts = self.policy.effective_attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            self.observer.on_attempt_start(attempt, max_attempts);

            let reason = match op().await {
                Ok(Attempt::Ready(value)) => {
                    self.observer.on_ready(attempt, start.elapsed());
                    return Ok(value);
                }
                Ok(Attempt::Pending(reason)) => reason,
                Err(err) => {
                    self.observer.on_aborted(attempt, &err);
                    return Err(RetryError::aborted(attempt, err));
                }
            };

            if attempt >= max_attempts {
                self.observer.on_exhausted(attempt, start.elapsed());
                return Err(RetryError::exhausted(attempt, start.elapsed(), reason));
            }

            let delay = calculate_delay(&self.policy);
            self.observer.on_pending(attempt, &reason, delay);

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }
}
