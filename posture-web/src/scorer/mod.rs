//! Scorer module - landmark geometry to neck/shoulder/spine sub-scores
//!
//! Re-exports only. All logic in submodules.

mod metrics;
mod geometric;

pub use metrics::PostureMetrics;
pub use geometric::GeometricScorer;
