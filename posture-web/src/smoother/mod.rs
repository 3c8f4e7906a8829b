//! Smoother module - temporal integration of per-frame results
//!
//! Re-exports only. All logic in submodules.

mod state;
mod snapshot;
mod update;
mod session;

pub use state::{SmoothedMetrics, SmootherState};
pub use snapshot::DisplaySnapshot;
pub use update::Smoother;
pub use session::{MetricsBreakdown, Session, SessionStats, SessionSummary};
