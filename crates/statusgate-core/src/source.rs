//! Status source trait
//!
//! The seam between the poller and whatever serves commit statuses.

use async_trait::async_trait;

use crate::types::CommitStatus;

/// Something that can list the statuses attached to a commit
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Error raised when the listing itself fails
    type Error: std::error::Error + Send + Sync + 'static;

    /// List statuses for `reference`, in the order the provider returns them
    async fn list_statuses(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<Vec<CommitStatus>, Self::Error>;
}

#[async_trait]
impl<T: StatusSource + ?Sized> StatusSource for std::sync::Arc<T> {
    type Error = T::Error;

    async fn list_statuses(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<Vec<CommitStatus>, Self::Error> {
        (**self).list_statuses(owner, repo, reference).await
    }
}
