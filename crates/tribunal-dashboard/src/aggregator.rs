//! Dispute aggregation
//!
//! Turns the flat dispute collection into bucketed counts and the short
//! list of unresolved disputes shown on the dashboard. Everything here is
//! pure: the same input sequence always produces the same summary.
//!
//! The recent list is a filter and truncate over the source order. It is
//! never re-sorted, so whatever priority the backend encodes in its
//! ordering is preserved.

use crate::state::{DashboardSummary, DisputeStats};
use tribunal_core::{DisputeRecord, DisputeStatus};

/// Maximum number of unresolved disputes surfaced on the dashboard
pub const RECENT_DISPUTE_LIMIT: usize = 5;

/// Build the dashboard summary for a dispute collection
#[must_use]
pub fn aggregate(disputes: &[DisputeRecord]) -> DashboardSummary {
    DashboardSummary {
        stats: count_statuses(disputes),
        recent_disputes: recent_unresolved(disputes, RECENT_DISPUTE_LIMIT),
    }
}

/// Partition the collection into status buckets
///
/// `total` is the input length, so records with an unrecognized status are
/// counted there without landing in any bucket.
#[must_use]
pub fn count_statuses(disputes: &[DisputeRecord]) -> DisputeStats {
    disputes.iter().fold(
        DisputeStats {
            total: disputes.len(),
            ..DisputeStats::default()
        },
        |mut stats, dispute| {
            match dispute.status {
                DisputeStatus::Pending => stats.pending += 1,
                DisputeStatus::UnderReview => stats.under_review += 1,
                DisputeStatus::Resolved => stats.resolved += 1,
                DisputeStatus::Unknown(_) => {}
            }
            stats
        },
    )
}

/// First `limit` disputes that are not resolved, in source order
#[must_use]
pub fn recent_unresolved(disputes: &[DisputeRecord], limit: usize) -> Vec<DisputeRecord> {
    disputes
        .iter()
        .filter(|dispute| !dispute.status.is_resolved())
        .take(limit)
        .cloned()
        .collect()
}
