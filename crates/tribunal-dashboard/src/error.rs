//! Error types for dispute fetching

use crate::state::FailureKind;
use thiserror::Error;

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors that can occur while fetching the dispute collection
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Network or protocol failure reported by the HTTP client
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend did not answer in time
    #[error("Dispute request timed out after {seconds} seconds")]
    Timeout {
        /// Configured timeout
        seconds: u64,
    },

    /// Non-2xx response
    #[error("Dispute service returned HTTP {status}")]
    HttpStatus {
        /// Response status code
        status: u16,
    },

    /// Body was not the expected JSON shape
    #[error("Malformed dispute response: {message}")]
    MalformedBody {
        /// Parse failure description
        message: String,
    },

    /// The backend answered with a falsy `success` indicator
    #[error("Dispute service rejected the request{}", rejected_suffix(.message))]
    Rejected {
        /// Message supplied by the backend, if any
        message: Option<String>,
    },

    /// Client could not be built from configuration
    #[error("Invalid dashboard configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },
}

#[allow(clippy::ref_option)]
fn rejected_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl DashboardError {
    /// Create a timeout error
    pub const fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    /// Create an HTTP status error
    pub const fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Create a malformed body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Create a rejected error
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected { message }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Category exposed to view-state consumers
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::HttpStatus { status } => FailureKind::HttpStatus(*status),
            Self::MalformedBody { .. } => FailureKind::MalformedBody,
            Self::Rejected { .. } => FailureKind::Rejected,
            Self::Configuration { .. } => FailureKind::Configuration,
        }
    }

    /// Whether a later attempt could plausibly succeed
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout { .. } => true,
            Self::HttpStatus { status } => *status >= 500 || *status == 429,
            Self::MalformedBody { .. } | Self::Rejected { .. } | Self::Configuration { .. } => {
                false
            }
        }
    }
}

impl From<DashboardError> for tribunal_core::Error {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Configuration { message } => Self::Configuration { message },
            other => Self::Fetch {
                message: other.to_string(),
            },
        }
    }
}
