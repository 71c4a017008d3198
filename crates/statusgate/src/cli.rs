//! CLI argument parsing with clap
//!
//! Every input can also come from the environment variables a GitHub
//! Actions runner sets for action inputs (`INPUT_<NAME>`).

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use statusgate_core::config::{DEFAULT_RETRY_COUNT, DEFAULT_RETRY_INTERVAL_SECS};
use statusgate_core::{PollConfig, RepositorySlug};
use statusgate_github::{ClientConfig, DEFAULT_API_URL};

/// Statusgate - wait for a commit status to resolve
#[derive(Parser, Debug)]
#[command(name = "statusgate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Token for the GitHub API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true, default_value = "")]
    pub token: String,

    /// Repository in <owner>/<repo> form
    #[arg(long, env = "INPUT_REPOSITORY", value_parser = parse_repository)]
    pub repository: RepositorySlug,

    /// Commit SHA or ref whose statuses are watched
    #[arg(long, env = "INPUT_SHA")]
    pub sha: String,

    /// Status context to wait for
    #[arg(long, env = "INPUT_STATUS")]
    pub status: String,

    /// Retries after the first check
    #[arg(long, env = "INPUT_CHECK-RETRY-COUNT", default_value_t = DEFAULT_RETRY_COUNT)]
    pub check_retry_count: u32,

    /// Seconds to wait between checks
    #[arg(long, env = "INPUT_CHECK-RETRY-INTERVAL", default_value_t = DEFAULT_RETRY_INTERVAL_SECS)]
    pub check_retry_interval: u64,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub http_timeout: u64,
}

fn parse_repository(value: &str) -> std::result::Result<RepositorySlug, String> {
    value.parse().map_err(|e: statusgate_core::Error| e.to_string())
}

impl Cli {
    /// Build the poll configuration, validating numeric inputs
    pub fn poll_config(&self) -> Result<PollConfig> {
        PollConfig::new(self.repository.clone(), self.sha.trim(), self.status.as_str())
            .context("Invalid poll input")?
            .with_retry_count(self.check_retry_count)
            .with_retry_interval_secs(self.check_retry_interval)
            .context("Invalid check-retry-interval")
    }

    /// Build the API client configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_api_url(self.api_url.as_str())
            .with_token(self.token.as_str())
            .with_timeout(Duration::from_secs(self.http_timeout))
    }
}
