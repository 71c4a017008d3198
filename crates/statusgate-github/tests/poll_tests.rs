//! End-to-end poll tests: `StatusPoller` driving `GitHubClient`
//!
//! Intervals are zero so the tests run on the real clock without waiting.

mod common;

use common::*;
use statusgate_core::{PollConfig, PollError, PollOutcome, RepositorySlug, StatusPoller, StatusState};
use wiremock::MockServer;

fn config(context: &str, retry_count: u32) -> PollConfig {
    let slug: RepositorySlug = format!("{OWNER}/{REPO}").parse().unwrap();
    PollConfig::new(slug, SHA, context)
        .unwrap()
        .with_retry_count(retry_count)
        .with_retry_interval_secs(0)
        .unwrap()
}

#[tokio::test]
async fn test_poll_pending_then_success() {
    let server = MockServer::start().await;
    mock_statuses_sequence(
        &server,
        vec![status_json("ci/build", "pending")],
        2,
        vec![status_json("ci/build", "success")],
    )
    .await;

    let poller = StatusPoller::new(client_for(&server), config("ci/build", 2));
    let outcome = poller.poll().await.unwrap();

    assert_eq!(outcome, PollOutcome::Success);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_poll_missing_context_exhausts() {
    let server = MockServer::start().await;
    mock_statuses(&server, vec![status_json("ci/build", "success")]).await;

    let poller = StatusPoller::new(client_for(&server), config("ci/lint", 3));
    let outcome = poller.poll().await.unwrap();

    assert_eq!(outcome, PollOutcome::Exhausted { attempts: 4 });
    assert_eq!(server.received_requests().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_poll_error_state_fails_after_one_fetch() {
    let server = MockServer::start().await;
    mock_statuses(&server, vec![status_json("ci/test", "error")]).await;

    let poller = StatusPoller::new(client_for(&server), config("ci/test", 5));
    let outcome = poller.poll().await.unwrap();

    assert_eq!(
        outcome,
        PollOutcome::Failed {
            state: StatusState::Error
        }
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_poll_unrecognized_state_on_other_context_still_succeeds() {
    let server = MockServer::start().await;
    mock_statuses(
        &server,
        vec![
            status_json("ci/other", "queued"),
            status_json("ci/build", "success"),
        ],
    )
    .await;

    let poller = StatusPoller::new(client_for(&server), config("ci/build", 2));
    let outcome = poller.poll().await.unwrap();

    assert_eq!(outcome, PollOutcome::Success);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_poll_unrecognized_state_on_target_exhausts() {
    let server = MockServer::start().await;
    mock_statuses(&server, vec![status_json("ci/build", "queued")]).await;

    let poller = StatusPoller::new(client_for(&server), config("ci/build", 2));
    let outcome = poller.poll().await.unwrap();

    assert_eq!(outcome, PollOutcome::Exhausted { attempts: 3 });
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_poll_api_error_is_fatal_and_not_retried() {
    let server = MockServer::start().await;
    mock_api_error(&server, 403, "Resource not accessible by integration").await;

    let poller = StatusPoller::new(client_for(&server), config("ci/build", 5));
    let err = poller.poll().await.unwrap_err();

    assert!(matches!(err, PollError::Transport { attempt: 1, .. }));
    assert!(err.to_string().contains("Resource not accessible by integration"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
