//! Commit status poller
//!
//! Fetches the statuses of a commit until the watched context resolves or
//! the retry budget runs out.
//!
//! # Decision per fetch
//!
//! | Watched context        | Result                         |
//! |------------------------|--------------------------------|
//! | absent or any other    | retry after the interval       |
//! | `success`              | [`PollOutcome::Success`]       |
//! | `failure` or `error`   | [`PollOutcome::Failed`]        |
//!
//! A failed fetch stops the poll at once with [`PollError::Transport`].

use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::PollConfig;
use crate::retry::{
    Attempt, RetryError, RetryExecutorBuilder, RetryObserver, RetryPolicy, TracingObserver,
};
use crate::source::StatusSource;
use crate::types::{find_status, CommitStatus, StatusState};

/// How a poll ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The context reported success
    Success,

    /// The context reported failure or error
    Failed { state: StatusState },

    /// The context never resolved within the retry budget
    Exhausted { attempts: u32 },
}

/// Fatal poll errors, distinct from an unsuccessful outcome
#[derive(Debug, Error)]
pub enum PollError {
    #[error("failed to fetch commit statuses (attempt {attempt}): {source}")]
    Transport {
        attempt: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Map one fetch to a retry decision
pub fn evaluate(statuses: &[CommitStatus], context: &str) -> Attempt<PollOutcome> {
    let Some(found) = find_status(statuses, context) else {
        return Attempt::pending(format!("commit status \"{context}\" not reported yet"));
    };

    match &found.state {
        state if !state.is_terminal() => {
            Attempt::pending(format!("commit status \"{context}\" is {state}"))
        }
        StatusState::Success => Attempt::Ready(PollOutcome::Success),
        state => Attempt::Ready(PollOutcome::Failed {
            state: state.clone(),
        }),
    }
}

/// Polls a [`StatusSource`] for one status context
pub struct StatusPoller<S, O = TracingObserver> {
    source: S,
    config: PollConfig,
    observer: O,
}

impl<S: StatusSource> StatusPoller<S> {
    pub fn new(source: S, config: PollConfig) -> Self {
        Self {
            source,
            config,
            observer: TracingObserver::new("commit status"),
        }
    }
}

impl<S: StatusSource, O: RetryObserver> StatusPoller<S, O> {
    /// Replace the retry observer
    pub fn with_observer<O2: RetryObserver>(self, observer: O2) -> StatusPoller<S, O2> {
        StatusPoller {
            source: self.source,
            config: self.config,
            observer,
        }
    }

    /// Poll until the watched context resolves or the budget is spent
    pub async fn poll(&self) -> Result<PollOutcome, PollError> {
        let config = &self.config;
        let policy = RetryPolicy::from_retry_count(config.retry_count, config.retry_interval);

        info!(
            repository = %format!("{}/{}", config.owner, config.repo),
            reference = %config.commit_ref,
            context = %config.status_context,
            max_attempts = policy.effective_attempts(),
            interval_ms = policy.interval_ms,
            "Waiting for commit status"
        );

        let executor = RetryExecutorBuilder::new()
            .with_policy(policy)
            .with_observer(&self.observer)
            .build();

        match executor.execute(|| self.fetch_once()).await {
            Ok(outcome) => {
                match &outcome {
                    PollOutcome::Success => {
                        info!(context = %config.status_context, "Commit status is now success")
                    }
                    PollOutcome::Failed { state } => error!(
                        context = %config.status_context,
                        state = %state,
                        "Commit status is now {}", state
                    ),
                    PollOutcome::Exhausted { .. } => {}
                }
                Ok(outcome)
            }
            Err(RetryError::Exhausted { attempts, .. }) => {
                error!(
                    context = %config.status_context,
                    attempts = attempts,
                    "Exceeded maximum retry count"
                );
                Ok(PollOutcome::Exhausted { attempts })
            }
            Err(RetryError::Aborted { attempt, source }) => Err(PollError::Transport {
                attempt,
                source: Box::new(source),
            }),
        }
    }

    async fn fetch_once(&self) -> Result<Attempt<PollOutcome>, S::Error> {
        let config = &self.config;
        let statuses = self
            .source
            .list_statuses(&config.owner, &config.repo, &config.commit_ref)
            .await?;

        info!(
            contexts = ?statuses.iter().map(|s| s.context.as_str()).collect::<Vec<_>>(),
            "Found commit status contexts"
        );
        if let Some(found) = find_status(&statuses, &config.status_context) {
            debug!(
                context = %found.context,
                state = %found.state,
                "Matched commit status"
            );
        }

        Ok(evaluate(&statuses, &config.status_context))
    }
}
