//! # statusgate-core
//!
//! Core library for statusgate providing:
//! - Commit status types and the first-match lookup rule
//! - Validated poll configuration
//! - A fixed-interval retry engine
//! - The `StatusPoller` that waits for one status context to resolve

pub mod config;
pub mod error;
pub mod poller;
pub mod retry;
pub mod source;
pub mod types;

pub use config::PollConfig;
pub use error::{Error, Result};
pub use poller::{PollError, PollOutcome, StatusPoller};
pub use source::StatusSource;
pub use types::{CommitStatus, RepositorySlug, StatusState};
