//! View state published by the dashboard controller
//!
//! The state is a tagged variant so a consumer can tell "zero disputes"
//! apart from "the fetch failed". The flat accessors (`stats`,
//! `recent_disputes`, `is_loading`) give the zeroed defaults for every
//! variant other than [`DashboardViewState::Ready`].

use serde::Serialize;
use std::fmt;
use tribunal_core::{DisputeRecord, DisputeStatus};

/// Status bucket counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DisputeStats {
    /// Disputes with status `PENDING`
    pub pending: usize,
    /// Disputes with status `UNDER_REVIEW`
    pub under_review: usize,
    /// Disputes with status `RESOLVED`
    pub resolved: usize,
    /// Every dispute in the input, recognized status or not
    pub total: usize,
}

impl DisputeStats {
    /// Records whose status fell outside the three known buckets
    #[must_use]
    pub const fn unrecognized(&self) -> usize {
        self.total
            .saturating_sub(self.pending + self.under_review + self.resolved)
    }

    /// Count for a single status; unknown statuses report the unrecognized count
    #[must_use]
    pub const fn count_for(&self, status: &DisputeStatus) -> usize {
        match status {
            DisputeStatus::Pending => self.pending,
            DisputeStatus::UnderReview => self.under_review,
            DisputeStatus::Resolved => self.resolved,
            DisputeStatus::Unknown(_) => self.unrecognized(),
        }
    }
}

/// Derived view of one successful fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Bucketed status counts
    pub stats: DisputeStats,
    /// Up to five unresolved disputes in source order
    pub recent_disputes: Vec<DisputeRecord>,
}

/// Why a fetch settled without data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "status", rename_all = "snake_case")]
pub enum FailureKind {
    /// Connection, TLS or protocol failure
    Transport,
    /// No answer within the configured timeout
    Timeout,
    /// Non-2xx response
    HttpStatus(u16),
    /// Response body was not the expected JSON
    MalformedBody,
    /// Backend answered with a falsy `success` indicator
    Rejected,
    /// The source itself was misconfigured; no request was made
    Configuration,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Timeout => write!(f, "timeout"),
            Self::HttpStatus(status) => write!(f, "http_status_{status}"),
            Self::MalformedBody => write!(f, "malformed_body"),
            Self::Rejected => write!(f, "rejected"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

/// Dashboard view state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DashboardViewState {
    /// No activation in progress
    #[default]
    Idle,
    /// Fetch outstanding
    Loading,
    /// Fetch succeeded
    Ready(DashboardSummary),
    /// Fetch failed; no data is shown
    Failed {
        /// Failure category
        kind: FailureKind,
        /// Human readable description, for logs and error affordances
        message: String,
    },
}

static EMPTY_STATS: DisputeStats = DisputeStats {
    pending: 0,
    under_review: 0,
    resolved: 0,
    total: 0,
};

impl DashboardViewState {
    /// True only while a fetch is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once a fetch has succeeded or failed
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed { .. })
    }

    /// Counts from the last successful fetch, zero otherwise
    #[must_use]
    pub fn stats(&self) -> &DisputeStats {
        match self {
            Self::Ready(summary) => &summary.stats,
            _ => &EMPTY_STATS,
        }
    }

    /// Recent unresolved disputes, empty unless ready
    #[must_use]
    pub fn recent_disputes(&self) -> &[DisputeRecord] {
        match self {
            Self::Ready(summary) => &summary.recent_disputes,
            _ => &[],
        }
    }

    /// Summary, if the fetch succeeded
    #[must_use]
    pub const fn summary(&self) -> Option<&DashboardSummary> {
        match self {
            Self::Ready(summary) => Some(summary),
            _ => None,
        }
    }

    /// Failure category, if the fetch failed
    #[must_use]
    pub const fn failure(&self) -> Option<FailureKind> {
        match self {
            Self::Failed { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ready_state() -> DashboardViewState {
        DashboardViewState::Ready(DashboardSummary {
            stats: DisputeStats {
                pending: 2,
                under_review: 1,
                resolved: 4,
                total: 8,
            },
            recent_disputes: vec![DisputeRecord::new("DSP-1", DisputeStatus::Pending)],
        })
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = DashboardViewState::default();
        assert_eq!(state, DashboardViewState::Idle);
        assert!(!state.is_loading());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_loading_exposes_zero_defaults() {
        let state = DashboardViewState::Loading;
        assert!(state.is_loading());
        assert_eq!(*state.stats(), DisputeStats::default());
        assert!(state.recent_disputes().is_empty());
    }

    #[test]
    fn test_failed_is_distinct_from_empty_ready() {
        let failed = DashboardViewState::Failed {
            kind: FailureKind::Timeout,
            message: "timed out".to_string(),
        };
        let empty = DashboardViewState::Ready(DashboardSummary::default());

        assert_eq!(failed.stats(), empty.stats());
        assert_eq!(failed.recent_disputes(), empty.recent_disputes());
        assert_ne!(failed, empty);
        assert_eq!(failed.failure(), Some(FailureKind::Timeout));
        assert_eq!(empty.failure(), None);
        assert!(failed.is_settled() && empty.is_settled());
    }

    #[test]
    fn test_ready_accessors() {
        let state = ready_state();
        assert_eq!(state.stats().total, 8);
        assert_eq!(state.stats().unrecognized(), 1);
        assert_eq!(state.recent_disputes().len(), 1);
        assert!(state.summary().is_some());
    }

    #[test]
    fn test_count_for_status() {
        let stats = *ready_state().stats();
        assert_eq!(stats.count_for(&DisputeStatus::Pending), 2);
        assert_eq!(stats.count_for(&DisputeStatus::UnderReview), 1);
        assert_eq!(stats.count_for(&DisputeStatus::Resolved), 4);
        assert_eq!(stats.count_for(&DisputeStatus::Unknown("X".into())), 1);
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::HttpStatus(503).to_string(), "http_status_503");
        assert_eq!(FailureKind::Rejected.to_string(), "rejected");
    }

    #[test]
    fn test_state_serialization_is_tagged() {
        let failed = DashboardViewState::Failed {
            kind: FailureKind::HttpStatus(502),
            message: "bad gateway".to_string(),
        };
        let value = serde_json::to_value(&failed).unwrap_or_default();

        assert_eq!(
            value,
            json!({
                "phase": "failed",
                "kind": {"type": "http_status", "status": 502},
                "message": "bad gateway"
            })
        );

        let loading = serde_json::to_value(DashboardViewState::Loading).unwrap_or_default();
        assert_eq!(loading, json!({"phase": "loading"}));
    }
}
