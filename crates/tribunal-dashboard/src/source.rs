//! Dispute source trait

use crate::error::DashboardResult;
use async_trait::async_trait;
use std::sync::Arc;
use tribunal_core::DisputeRecord;

/// Supplier of the dispute collection
///
/// The controller only ever talks to the backend through this trait, so
/// the HTTP client and the in-memory mock are interchangeable.
#[async_trait]
pub trait DisputeSource: Send + Sync {
    /// Fetch the full dispute collection in backend order
    ///
    /// Any transport failure, non-success status, malformed body or falsy
    /// success indicator is reported as an error.
    async fn fetch_disputes(&self) -> DashboardResult<Vec<DisputeRecord>>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

#[async_trait]
impl<S: DisputeSource + ?Sized> DisputeSource for Arc<S> {
    async fn fetch_disputes(&self) -> DashboardResult<Vec<DisputeRecord>> {
        (**self).fetch_disputes().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
