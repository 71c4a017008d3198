//! GitHub REST client for commit statuses
//!
//! Covers the one read endpoint the poller needs:
//! `GET /repos/{owner}/{repo}/commits/{ref}/statuses`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use statusgate_core::{CommitStatus, StatusSource};
use thiserror::Error;
use tracing::{debug, trace};
use url::Url;

use crate::config::ClientConfig;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Errors that can occur when talking to the GitHub API
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    #[error("Token contains characters not allowed in a header")]
    InvalidToken,

    #[error("GitHub API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result type for GitHub API operations
pub type GitHubResult<T> = Result<T, GitHubError>;

/// Error payload GitHub returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Client for the GitHub commit status API
///
/// One instance holds one connection pool and is reused for every fetch.
///
/// # Example
/// ```no_run
/// use statusgate_github::{ClientConfig, GitHubClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GitHubClient::new(ClientConfig::default().with_token("ghp_example"))?;
/// let statuses = client
///     .list_commit_statuses("octo-org", "widgets", "main")
///     .await?;
/// println!("{} statuses", statuses.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: Url,
    client: Client,
    per_page: u8,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> GitHubResult<Self> {
        let base_url = parse_base_url(&config.api_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| GitHubError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            base_url,
            client,
            per_page: config.per_page.max(1),
        })
    }

    /// Build the status listing URL for a reference
    pub fn statuses_url(&self, owner: &str, repo: &str, reference: &str) -> GitHubResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "commits", reference, "statuses"]);
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string());
        Ok(url)
    }

    /// List commit statuses for a reference, newest first
    ///
    /// Only the first page is read; it holds the most recent statuses.
    pub async fn list_commit_statuses(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> GitHubResult<Vec<CommitStatus>> {
        let url = self.statuses_url(owner, repo, reference)?;
        debug!(url = %url, "Fetching commit statuses");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let statuses: Vec<CommitStatus> =
            serde_json::from_slice(&body).map_err(GitHubError::Decode)?;
        debug!(count = statuses.len(), "Fetched commit statuses");
        trace!(statuses = ?statuses, "Commit status response");
        Ok(statuses)
    }
}

#[async_trait]
impl StatusSource for GitHubClient {
    type Error = GitHubError;

    async fn list_statuses(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<Vec<CommitStatus>, Self::Error> {
        self.list_commit_statuses(owner, repo, reference).await
    }
}

/// Parse the API base, keeping any path prefix (GitHub Enterprise uses `/api/v3`)
fn parse_base_url(api_url: &str) -> GitHubResult<Url> {
    let trimmed = api_url.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{trimmed}/"))?;
    if url.cannot_be_a_base() {
        return Err(GitHubError::InvalidBaseUrl(api_url.to_string()));
    }
    Ok(url)
}
