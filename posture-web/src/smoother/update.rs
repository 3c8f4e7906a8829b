//! Smoother - exponential moving average plus momentum integration
//!
//! Per evaluated frame:
//! - display_score += (score - display_score) × 0.1
//! - each sub-metric is smoothed the same way
//! - momentum +0.05 when good (max 1.0), -0.10 when bad (min -1.0)
//! - slouch_seconds += 1/30 when bad
//!
//! Degradation is penalised twice as fast as recovery is rewarded.
//! Ignored frames pass straight through.

use crate::config::SmootherConfig;
use crate::result::PostureResult;

use super::snapshot::DisplaySnapshot;
use super::state::SmootherState;

pub struct Smoother {
    config: SmootherConfig,
}

impl Smoother {
    pub fn new(config: &SmootherConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Fold one result into `state` and return the updated snapshot.
    ///
    /// Results with an ignore reason leave `state` untouched.
    pub fn update(&self, state: &mut SmootherState, result: &PostureResult) -> DisplaySnapshot {
        if result.is_ignored() {
            return DisplaySnapshot::from(&*state);
        }

        let factor = self.config.smoothing_factor;
        state.display_score += (result.score as f32 - state.display_score) * factor;
        state.metrics.approach(&result.metrics, factor);

        if result.is_good {
            state.momentum = (state.momentum + self.config.momentum_gain).min(1.0);
        } else {
            state.momentum = (state.momentum - self.config.momentum_loss).max(-1.0);
            state.slouch_seconds += self.config.frame_interval_secs;
        }

        DisplaySnapshot::from(&*state)
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(&SmootherConfig::default())
    }
}
