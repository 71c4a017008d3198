//! Error types for statusgate-core

use thiserror::Error;

/// Result type alias using statusgate-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised before any status is fetched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Repository was not given as `owner/repo`
    #[error("Invalid repository '{value}': expected the form <owner>/<repo>")]
    InvalidRepository { value: String },

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Retry interval does not fit in milliseconds
    #[error("Retry interval of {seconds}s is too large")]
    IntervalOverflow { seconds: u64 },
}

impl Error {
    /// Create an invalid repository error
    pub fn invalid_repository(value: impl Into<String>) -> Self {
        Self::InvalidRepository {
            value: value.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
