//! Dispute summary dashboard
//!
//! Fetches the dispute collection from the tribunal backend, reduces it to
//! status counts plus a short list of unresolved disputes, and publishes
//! the result through a watch channel that tracks the fetch lifecycle.
//!
//! ```no_run
//! use tribunal_dashboard::{DashboardController, HttpDisputeClient};
//!
//! # async fn demo() -> tribunal_dashboard::DashboardResult<()> {
//! let client = HttpDisputeClient::new("http://localhost:5000")?;
//! let controller = DashboardController::new(client);
//!
//! controller.load().await;
//! println!("{} disputes", controller.state().stats().total);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod aggregator;
pub mod controller;
pub mod error;
pub mod http;
pub mod mock;
pub mod navigation;
pub mod source;
pub mod state;

// Re-export commonly used types
pub use aggregator::{RECENT_DISPUTE_LIMIT, aggregate};
pub use controller::{Activation, DashboardController, Settlement};
pub use error::{DashboardError, DashboardResult};
pub use http::HttpDisputeClient;
pub use mock::{MockDisputeSource, MockGate, MockReply};
pub use navigation::{NavigationIntent, StatusShortcut};
pub use source::DisputeSource;
pub use state::{DashboardSummary, DashboardViewState, DisputeStats, FailureKind};
