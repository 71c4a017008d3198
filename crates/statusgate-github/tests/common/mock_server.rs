//! Mock server helpers for the commit status endpoint

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{OWNER, REPO, SHA};

/// Path of the status listing for the default test commit
pub fn statuses_path() -> String {
    format!("/repos/{OWNER}/{REPO}/commits/{SHA}/statuses")
}

/// Always answer with `statuses`
pub async fn mock_statuses(server: &MockServer, statuses: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(statuses_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(statuses)))
        .mount(server)
        .await;
}

/// Answer with `first` for `times` requests, then with `then`
pub async fn mock_statuses_sequence(
    server: &MockServer,
    first: Vec<Value>,
    times: u64,
    then: Vec<Value>,
) {
    Mock::given(method("GET"))
        .and(path(statuses_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(first)))
        .up_to_n_times(times)
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(statuses_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(then)))
        .with_priority(2)
        .mount(server)
        .await;
}

/// Answer with an API error
pub async fn mock_api_error(server: &MockServer, status: u16, message: &str) {
    Mock::given(method("GET"))
        .and(path(statuses_path()))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "message": message,
                "documentation_url": "https://docs.github.com/rest"
            })),
        )
        .mount(server)
        .await;
}
