//! GitHub commit status client for statusgate
//!
//! Provides:
//! - `ClientConfig` with API URL, token, user agent and timeout settings
//! - `GitHubClient`, a reqwest-based client implementing `StatusSource`

pub mod client;
pub mod config;

pub use client::{GitHubClient, GitHubError, GitHubResult};
pub use config::{ClientConfig, DEFAULT_API_URL};
