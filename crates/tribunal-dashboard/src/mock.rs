//! Mock dispute source for testing

use crate::error::{DashboardError, DashboardResult};
use crate::source::DisputeSource;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;
use tokio::time::{Duration, sleep};
use tribunal_core::DisputeRecord;

/// Scripted answer for one fetch
#[derive(Debug, Clone, PartialEq)]
pub enum MockReply {
    /// Successful fetch
    Disputes(Vec<DisputeRecord>),
    /// Request timed out
    Timeout,
    /// Non-2xx status
    HttpStatus(u16),
    /// Unparsable body
    Malformed(String),
    /// Falsy success indicator
    Rejected(Option<String>),
}

impl MockReply {
    fn into_result(self) -> DashboardResult<Vec<DisputeRecord>> {
        match self {
            Self::Disputes(disputes) => Ok(disputes),
            Self::Timeout => Err(DashboardError::timeout(0)),
            Self::HttpStatus(status) => Err(DashboardError::http_status(status)),
            Self::Malformed(message) => Err(DashboardError::malformed(message)),
            Self::Rejected(message) => Err(DashboardError::rejected(message)),
        }
    }
}

/// Releases fetches held by a gated [`MockDisputeSource`]
#[derive(Debug, Clone)]
pub struct MockGate {
    permits: Arc<Semaphore>,
}

impl MockGate {
    /// Let one held fetch complete
    pub fn release(&self) {
        self.permits.add_permits(1);
    }

    /// Let `count` held fetches complete
    pub fn release_many(&self, count: usize) {
        self.permits.add_permits(count);
    }
}

/// In-memory dispute source with scripted replies
///
/// Replies are consumed in call order; once the script runs out every
/// call gets the fallback reply.
#[derive(Debug)]
pub struct MockDisputeSource {
    /// Replies for upcoming calls
    script: Mutex<VecDeque<MockReply>>,

    /// Reply once the script is exhausted
    fallback: MockReply,

    /// Simulated latency
    delay: Option<Duration>,

    /// When set, each fetch waits for a permit
    gate: Option<Arc<Semaphore>>,

    /// Number of fetches started
    calls: AtomicUsize,
}

impl MockDisputeSource {
    /// Source that always returns `disputes`
    pub fn new(disputes: Vec<DisputeRecord>) -> Self {
        Self::with_reply(MockReply::Disputes(disputes))
    }

    /// Source that always answers with `reply`
    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: reply,
            delay: None,
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue replies for the next calls, ahead of the fallback
    #[must_use]
    pub fn with_script(self, replies: impl IntoIterator<Item = MockReply>) -> Self {
        self.script.lock().extend(replies);
        self
    }

    /// Set processing delay for testing
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Hold every fetch until the returned gate releases it
    #[must_use]
    pub fn gated(mut self) -> (Self, MockGate) {
        let permits = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&permits));
        (self, MockGate { permits })
    }

    /// Number of fetches started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Acquire)
    }
}

impl Default for MockDisputeSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl DisputeSource for MockDisputeSource {
    async fn fetch_disputes(&self) -> DashboardResult<Vec<DisputeRecord>> {
        // The reply is picked when the call starts so call order decides it
        let reply = self
            .script
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        self.calls.fetch_add(1, Ordering::AcqRel);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|_| DashboardError::configuration("mock gate closed"))?
                .forget();
        }

        if let Some(delay) = self.delay {
            sleep(delay).await;
        }

        reply.into_result()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
