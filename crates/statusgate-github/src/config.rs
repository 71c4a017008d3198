//! Client configuration

use std::time::Duration;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Statuses requested per fetch; GitHub's maximum page size
pub const DEFAULT_PER_PAGE: u8 = 100;

/// Settings for [`crate::GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, e.g. `https://ghe.example.com/api/v3`
    pub api_url: String,

    /// Token sent as a bearer credential; anonymous when `None`
    pub token: Option<String>,

    /// User agent string for HTTP requests
    pub user_agent: String,

    /// Per-request timeout
    pub http_timeout: Duration,

    /// Page size for the status listing
    pub per_page: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_agent: default_user_agent(),
            http_timeout: Duration::from_secs(30),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }
}

fn default_user_agent() -> String {
    format!(
        "statusgate/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
