//! Navigation intents emitted by the dashboard
//!
//! The dashboard never renders the dispute list or detail pages itself. It
//! hands the host an intent, and the host maps it to a route.

use crate::state::DashboardSummary;
use serde::Serialize;
use std::fmt;
use tribunal_core::{DisputeId, DisputeStatus};

/// Base route of the dispute pages
pub const DISPUTES_ROUTE: &str = "/tribunal/disputes";

/// Where a dashboard interaction leads
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "target", content = "value", rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Dispute list filtered to one status
    DisputesByStatus(DisputeStatus),
    /// Detail page of a single dispute
    DisputeDetail(DisputeId),
    /// Unfiltered dispute list
    AllDisputes,
}

impl NavigationIntent {
    /// Route path for this intent
    #[must_use]
    pub fn route(&self) -> String {
        match self {
            Self::DisputesByStatus(status) => format!(
                "{DISPUTES_ROUTE}?status={}",
                urlencoding::encode(status.as_str())
            ),
            Self::DisputeDetail(id) => format!("{DISPUTES_ROUTE}/{}", urlencoding::encode(id)),
            Self::AllDisputes => DISPUTES_ROUTE.to_string(),
        }
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

/// Clickable status card on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusShortcut {
    /// Status the card filters by
    pub status: DisputeStatus,
    /// Human label
    pub label: &'static str,
    /// Number of disputes in the bucket
    pub count: usize,
    /// Where the card leads
    pub intent: NavigationIntent,
}

impl DashboardSummary {
    /// One shortcut per known status, in display order
    #[must_use]
    pub fn shortcuts(&self) -> Vec<StatusShortcut> {
        DisputeStatus::KNOWN
            .into_iter()
            .map(|status| StatusShortcut {
                label: status.label(),
                count: self.stats.count_for(&status),
                intent: NavigationIntent::DisputesByStatus(status.clone()),
                status,
            })
            .collect()
    }

    /// Detail intents for the recent disputes, in list order
    #[must_use]
    pub fn recent_intents(&self) -> Vec<NavigationIntent> {
        self.recent_disputes
            .iter()
            .map(|dispute| NavigationIntent::DisputeDetail(dispute.dispute_id.clone()))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tribunal_core::DisputeRecord;

    #[rstest]
    #[case(NavigationIntent::AllDisputes, "/tribunal/disputes")]
    #[case(
        NavigationIntent::DisputesByStatus(DisputeStatus::Pending),
        "/tribunal/disputes?status=PENDING"
    )]
    #[case(
        NavigationIntent::DisputesByStatus(DisputeStatus::UnderReview),
        "/tribunal/disputes?status=UNDER_REVIEW"
    )]
    #[case(
        NavigationIntent::DisputeDetail("d-42".to_string()),
        "/tribunal/disputes/d-42"
    )]
    #[case(
        NavigationIntent::DisputeDetail("a/b c".to_string()),
        "/tribunal/disputes/a%2Fb%20c"
    )]
    fn test_routes(#[case] intent: NavigationIntent, #[case] expected: &str) {
        assert_eq!(intent.route(), expected);
        assert_eq!(intent.to_string(), expected);
    }

    #[test]
    fn test_shortcuts_follow_stats() {
        let summary = aggregate(&[
            DisputeRecord::new("d1", "PENDING"),
            DisputeRecord::new("d2", "PENDING"),
            DisputeRecord::new("d3", "RESOLVED"),
        ]);

        let shortcuts = summary.shortcuts();

        assert_eq!(shortcuts.len(), 3);
        assert_eq!(
            shortcuts
                .iter()
                .map(|s| (s.label, s.count))
                .collect::<Vec<_>>(),
            vec![("Pending", 2), ("Under Review", 0), ("Resolved", 1)]
        );
        assert_eq!(
            shortcuts[1].intent,
            NavigationIntent::DisputesByStatus(DisputeStatus::UnderReview)
        );
    }

    #[test]
    fn test_shortcuts_on_empty_summary() {
        let shortcuts = DashboardSummary::default().shortcuts();
        assert!(shortcuts.iter().all(|s| s.count == 0));
    }

    #[test]
    fn test_recent_intents_in_order() {
        let summary = aggregate(&[
            DisputeRecord::new("d1", "UNDER_REVIEW"),
            DisputeRecord::new("d2", "RESOLVED"),
            DisputeRecord::new("d3", "PENDING"),
        ]);

        assert_eq!(
            summary.recent_intents(),
            vec![
                NavigationIntent::DisputeDetail("d1".to_string()),
                NavigationIntent::DisputeDetail("d3".to_string()),
            ]
        );
    }
}
