//! Dashboard view of the smoother state

use serde::{Deserialize, Serialize};

use crate::scorer::PostureMetrics;

use super::state::SmootherState;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub display_score: f32,
    /// Smoothed sub-metrics, rounded
    pub metrics: PostureMetrics,
    pub momentum: f32,
    pub slouch_seconds: f32,
}

impl From<&SmootherState> for DisplaySnapshot {
    fn from(state: &SmootherState) -> Self {
        Self {
            display_score: state.display_score,
            metrics: state.metrics.rounded(),
            momentum: state.momentum,
            slouch_seconds: state.slouch_seconds,
        }
    }
}
