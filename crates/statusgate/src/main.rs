//! Statusgate CLI - block a pipeline step on a commit status
//!
//! Polls the GitHub commit status API until the watched context resolves,
//! then exits 0 on success and 1 otherwise.

mod cli;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use statusgate_core::{PollOutcome, StatusPoller};
use statusgate_github::GitHubClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version land here too
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            report::set_failed(err.to_string().trim_end());
            return ExitCode::from(report::FATAL_EXIT_CODE);
        }
    };

    init_tracing(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(outcome) => {
            tracing::info!("Done waiting.");
            ExitCode::from(report::exit_code(outcome))
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Status check errored");
            report::set_failed(&format!("{err:#}"));
            ExitCode::from(report::FATAL_EXIT_CODE)
        }
    }
}

/// Poll once per run with a single client
async fn run(cli: &Cli) -> Result<PollOutcome> {
    let config = cli.poll_config()?;
    let client =
        GitHubClient::new(cli.client_config()).context("Failed to create GitHub client")?;

    let poller = StatusPoller::new(client, config);
    let outcome = poller.poll().await?;
    Ok(outcome)
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        })
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
