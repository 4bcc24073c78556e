//! HTTP client for the dispute service

use crate::error::{DashboardError, DashboardResult};
use crate::source::DisputeSource;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use tribunal_core::{ApiConfig, DisputeRecord};

/// Path of the dispute collection, relative to the API origin
pub const DISPUTES_PATH: &str = "/api/disputes";

/// Response envelope; every field is optional so the checks below decide
#[derive(Debug, Deserialize)]
struct DisputeListEnvelope {
    #[serde(default)]
    success: Value,
    #[serde(default)]
    disputes: Value,
    #[serde(default)]
    message: Value,
    #[serde(default)]
    error: Value,
}

/// API client that fetches disputes from `GET {base}/api/disputes`
#[derive(Debug, Clone)]
pub struct HttpDisputeClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpDisputeClient {
    /// Create a client from the API section of the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL does not parse or the
    /// HTTP client cannot be built.
    pub fn from_config(api: &ApiConfig) -> DashboardResult<Self> {
        Url::parse(&api.base_url).map_err(|e| {
            DashboardError::configuration(format!("invalid base URL '{}': {e}", api.base_url))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(api.request_timeout_secs))
            .connect_timeout(Duration::from_secs(api.connect_timeout_secs))
            .build()
            .map_err(|e| DashboardError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: api.origin().to_string(),
            timeout_secs: api.request_timeout_secs,
        })
    }

    /// Create a client for `base_url` with default timeouts
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL does not parse.
    pub fn new(base_url: impl Into<String>) -> DashboardResult<Self> {
        Self::from_config(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Full URL of the dispute collection
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{DISPUTES_PATH}", self.base_url)
    }

    fn classify(&self, err: reqwest::Error) -> DashboardError {
        if err.is_timeout() {
            DashboardError::timeout(self.timeout_secs)
        } else {
            DashboardError::Transport(err)
        }
    }
}

#[async_trait]
impl DisputeSource for HttpDisputeClient {
    async fn fetch_disputes(&self) -> DashboardResult<Vec<DisputeRecord>> {
        let url = self.endpoint();
        debug!(%url, "Fetching disputes");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::http_status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let disputes = parse_dispute_list(&body)?;

        debug!(count = disputes.len(), "Fetched disputes");
        Ok(disputes)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Decode a `{ "success": true, "disputes": [...] }` body
///
/// A missing or falsy `success` is a rejection even when disputes are
/// present; a truthy `success` without a `disputes` array is malformed.
///
/// # Errors
///
/// Returns [`DashboardError::MalformedBody`] for bodies that are not JSON
/// objects or whose disputes do not decode, and
/// [`DashboardError::Rejected`] for a falsy success indicator.
pub fn parse_dispute_list(body: &[u8]) -> DashboardResult<Vec<DisputeRecord>> {
    let envelope: DisputeListEnvelope = serde_json::from_slice(body)
        .map_err(|e| DashboardError::malformed(format!("expected a JSON object: {e}")))?;

    if !is_truthy(&envelope.success) {
        let message = envelope
            .message
            .as_str()
            .or_else(|| envelope.error.as_str())
            .map(str::to_string);
        return Err(DashboardError::rejected(message));
    }

    serde_json::from_value(envelope.disputes)
        .map_err(|e| DashboardError::malformed(format!("invalid disputes array: {e}")))
}

/// JSON truthiness as the backend's clients understand it
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
