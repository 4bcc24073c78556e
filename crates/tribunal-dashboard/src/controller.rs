//! Dashboard controller
//!
//! Owns the published [`DashboardViewState`] and drives one fetch per
//! activation through `Idle -> Loading -> Ready | Failed`.
//!
//! Every activation gets a generation number. A fetch only settles the
//! state if its generation is still current, so a response that arrives
//! after [`DashboardController::deactivate`] (or after a newer activation)
//! is dropped instead of overwriting the newer state. Generation bumps and
//! settles both run inside the watch channel's write lock, which keeps the
//! check and the publish atomic with respect to each other.

use crate::aggregator::aggregate;
use crate::source::DisputeSource;
use crate::state::{DashboardViewState, DisputeStats, FailureKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Ticket for a single fetch, handed out by [`DashboardController::activate`]
#[derive(Debug)]
#[must_use = "an activation does nothing until passed to DashboardController::run"]
pub struct Activation {
    generation: u64,
}

impl Activation {
    /// Generation this activation belongs to
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// How a fetch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Disputes were fetched and published
    Ready(DisputeStats),
    /// The fetch failed and the failure was published
    Failed(FailureKind),
    /// The activation was superseded; the result was discarded
    Stale,
}

/// Drives the dispute fetch and publishes the derived view state
#[derive(Debug)]
pub struct DashboardController<S> {
    source: S,
    state: watch::Sender<DashboardViewState>,
    generation: AtomicU64,
}

impl<S: DisputeSource> DashboardController<S> {
    /// Create a controller in the `Idle` state
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(DashboardViewState::Idle);
        Self {
            source,
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Receiver that observes every published state
    pub fn subscribe(&self) -> watch::Receiver<DashboardViewState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> DashboardViewState {
        self.state.borrow().clone()
    }

    /// The underlying dispute source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Start a new activation and publish `Loading`
    ///
    /// Any activation still in flight becomes stale.
    pub fn activate(&self) -> Activation {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
            *state = DashboardViewState::Loading;
        });

        debug!(generation, source = self.source.name(), "Dashboard activated");
        Activation { generation }
    }

    /// Tear down the current activation and publish `Idle`
    pub fn deactivate(&self) {
        self.state.send_modify(|state| {
            self.generation.fetch_add(1, Ordering::AcqRel);
            *state = DashboardViewState::Idle;
        });

        debug!("Dashboard deactivated");
    }

    /// Whether `activation` is still the current one
    pub fn is_current(&self, activation: &Activation) -> bool {
        self.generation.load(Ordering::Acquire) == activation.generation
    }

    /// Fetch disputes for `activation` and settle the state
    ///
    /// Failures are absorbed here: they are logged once and published as
    /// [`DashboardViewState::Failed`], never returned as errors.
    #[instrument(skip_all, fields(generation = activation.generation, source = self.source.name()))]
    pub async fn run(&self, activation: Activation) -> Settlement {
        let outcome = self.source.fetch_disputes().await;

        let mut failure = None;
        let (next, settlement) = match outcome {
            Ok(disputes) => {
                let summary = aggregate(&disputes);
                let settlement = Settlement::Ready(summary.stats);
                (DashboardViewState::Ready(summary), settlement)
            }
            Err(err) => {
                let kind = err.kind();
                let next = DashboardViewState::Failed {
                    kind,
                    message: err.to_string(),
                };
                failure = Some(err);
                (next, Settlement::Failed(kind))
            }
        };

        let generation = activation.generation;
        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::Acquire) != generation {
                return false;
            }
            *state = next;
            true
        });

        if !applied {
            debug!(?settlement, "Discarding result of superseded activation");
            return Settlement::Stale;
        }

        match settlement {
            Settlement::Ready(stats) => info!(
                total = stats.total,
                pending = stats.pending,
                under_review = stats.under_review,
                resolved = stats.resolved,
                "Dashboard ready"
            ),
            Settlement::Failed(kind) => {
                if let Some(err) = &failure {
                    warn!(%kind, error = %err, retryable = err.is_retryable(), "Dispute fetch failed");
                }
            }
            Settlement::Stale => {}
        }

        settlement
    }

    /// Activate and run in one step
    pub async fn load(&self) -> Settlement {
        let activation = self.activate();
        self.run(activation).await
    }
}

impl<S: DisputeSource + 'static> DashboardController<S> {
    /// Activate now and run the fetch on a background task
    ///
    /// The state is `Loading` by the time this returns.
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<Settlement> {
        let activation = self.activate();
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.run(activation).await })
    }
}
