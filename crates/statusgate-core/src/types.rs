//! Commit status domain types
//!
//! These mirror the subset of GitHub's commit status payload that the
//! poller looks at. Extra fields in the API response are ignored.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// State of a single commit status
///
/// States outside the four GitHub documents are kept verbatim in
/// [`StatusState::Other`] so one unexpected entry never fails a whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusState {
    Pending,
    Success,
    Failure,
    Error,
    /// Any other state string reported by the API
    Other(String),
}

impl StatusState {
    /// Whether the status has resolved and will not change on its own
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StatusState::Success | StatusState::Failure | StatusState::Error
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusState::Pending => "pending",
            StatusState::Success => "success",
            StatusState::Failure => "failure",
            StatusState::Error => "error",
            StatusState::Other(raw) => raw,
        }
    }
}

impl From<String> for StatusState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => StatusState::Pending,
            "success" => StatusState::Success,
            "failure" => StatusState::Failure,
            "error" => StatusState::Error,
            _ => StatusState::Other(raw),
        }
    }
}

impl From<StatusState> for String {
    fn from(state: StatusState) -> Self {
        match state {
            StatusState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status attached to a commit, as returned by one fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Context name, e.g. `ci/build`
    pub context: String,

    /// Current state
    pub state: StatusState,

    /// Human readable description set by the reporter
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the reporter's details page
    #[serde(default)]
    pub target_url: Option<String>,

    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CommitStatus {
    /// Create a status with only the fields the poller needs
    pub fn new(context: impl Into<String>, state: StatusState) -> Self {
        Self {
            context: context.into(),
            state,
            description: None,
            target_url: None,
            updated_at: None,
        }
    }
}

/// Find the authoritative status for `context`.
///
/// The first entry in response order wins. GitHub lists statuses newest
/// first, so this is the latest status reported for the context.
pub fn find_status<'a>(statuses: &'a [CommitStatus], context: &str) -> Option<&'a CommitStatus> {
    statuses.iter().find(|s| s.context == context)
}

/// Repository identifier in `owner/repo` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepositorySlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(Error::invalid_repository(s)),
        }
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
