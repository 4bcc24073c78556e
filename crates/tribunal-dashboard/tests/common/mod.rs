//! Shared fixtures for the dashboard integration tests

#![allow(dead_code, clippy::unwrap_used)]

use serde_json::{Value, json};
use tribunal_core::ApiConfig;
use tribunal_dashboard::HttpDisputeClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One dispute as the backend serializes it
pub fn dispute_json(id: &str, status: &str) -> Value {
    json!({
        "dispute_id": id,
        "job_id": format!("job-{id}"),
        "status": status,
        "description": format!("Dispute {id}"),
        "reason": "Work not delivered",
        "raised_by": "client-7",
        "amount": 125.5,
        "raised_at": "2024-03-15T14:25:30Z"
    })
}

/// Successful list response for the given `(id, status)` pairs
pub fn success_body(disputes: &[(&str, &str)]) -> Value {
    let disputes: Vec<Value> = disputes
        .iter()
        .map(|(id, status)| dispute_json(id, status))
        .collect();

    json!({
        "success": true,
        "count": disputes.len(),
        "disputes": disputes
    })
}

/// Mount `template` on `GET /api/disputes`
pub async fn mount_disputes(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/disputes"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Client pointed at the mock server with a short timeout
pub fn client_for(server: &MockServer) -> HttpDisputeClient {
    HttpDisputeClient::from_config(&ApiConfig {
        base_url: server.uri(),
        request_timeout_secs: 1,
        connect_timeout_secs: 1,
    })
    .unwrap()
}
