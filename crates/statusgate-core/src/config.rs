//! Poll configuration
//!
//! `PollConfig` is built once from validated input and never changes while
//! the poller runs.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::types::RepositorySlug;

/// Default number of retries after the first attempt
pub const DEFAULT_RETRY_COUNT: u32 = 10;

/// Default wait between attempts, in seconds
pub const DEFAULT_RETRY_INTERVAL_SECS: u64 = 5;

/// What to poll and how long to keep trying
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Commit SHA, branch or tag the statuses are attached to
    pub commit_ref: String,

    /// Status context to wait for
    pub status_context: String,

    /// Retries after the first attempt; 0 means a single fetch
    pub retry_count: u32,

    /// Wait between attempts
    pub retry_interval: Duration,
}

impl PollConfig {
    /// Build a config from already-parsed parts
    pub fn new(
        repository: RepositorySlug,
        commit_ref: impl Into<String>,
        status_context: impl Into<String>,
    ) -> Result<Self> {
        let commit_ref = commit_ref.into();
        let status_context = status_context.into();

        if commit_ref.trim().is_empty() {
            return Err(Error::missing_field("sha"));
        }
        if status_context.trim().is_empty() {
            return Err(Error::missing_field("status"));
        }

        Ok(Self {
            owner: repository.owner,
            repo: repository.repo,
            commit_ref,
            status_context,
            retry_count: DEFAULT_RETRY_COUNT,
            retry_interval: Duration::from_secs(DEFAULT_RETRY_INTERVAL_SECS),
        })
    }

    /// Set the number of retries after the first attempt
    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Set the interval from whole seconds, as supplied by the pipeline
    pub fn with_retry_interval_secs(mut self, seconds: u64) -> Result<Self> {
        let millis = seconds
            .checked_mul(1000)
            .ok_or(Error::IntervalOverflow { seconds })?;
        self.retry_interval = Duration::from_millis(millis);
        Ok(self)
    }

    /// Set the interval directly
    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }
}
