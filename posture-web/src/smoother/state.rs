//! Smoother state - the only long-lived value in the pipeline
//!
//! One per tracking session. Owned by the caller, mutated only through
//! `Smoother::update`.

use serde::{Deserialize, Serialize};

use crate::scorer::PostureMetrics;

/// Sub-metrics smoothed as floats so small steps are not lost to rounding
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmoothedMetrics {
    pub neck: f32,
    pub shoulders: f32,
    pub spine: f32,
}

impl SmoothedMetrics {
    /// Move each metric `factor` of the way toward `target`
    pub fn approach(&mut self, target: &PostureMetrics, factor: f32) {
        self.neck += (target.neck as f32 - self.neck) * factor;
        self.shoulders += (target.shoulders as f32 - self.shoulders) * factor;
        self.spine += (target.spine as f32 - self.spine) * factor;
    }

    pub fn rounded(&self) -> PostureMetrics {
        PostureMetrics::from_scores(self.neck, self.shoulders, self.spine)
            .unwrap_or(PostureMetrics::PERFECT)
    }
}

impl Default for SmoothedMetrics {
    fn default() -> Self {
        Self {
            neck: 100.0,
            shoulders: 100.0,
            spine: 100.0,
        }
    }
}

/// Running display values for one session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmootherState {
    /// EMA of the global score (0-100)
    pub(crate) display_score: f32,

    /// -1.0 (sustained slouching) to 1.0 (sustained good posture)
    pub(crate) momentum: f32,

    /// Seconds of bad posture, counted per frame at the nominal cadence
    pub(crate) slouch_seconds: f32,

    /// EMA of the sub-metrics
    pub(crate) metrics: SmoothedMetrics,
}

impl SmootherState {
    /// Session defaults: score 100, no momentum, no slouch time
    pub fn new() -> Self {
        Self {
            display_score: 100.0,
            momentum: 0.0,
            slouch_seconds: 0.0,
            metrics: SmoothedMetrics::default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn display_score(&self) -> f32 {
        self.display_score
    }

    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    /// Coarse: frame count × nominal frame interval, not wall-clock time
    pub fn slouch_seconds(&self) -> f32 {
        self.slouch_seconds
    }

    pub fn metrics(&self) -> &SmoothedMetrics {
        &self.metrics
    }
}

impl Default for SmootherState {
    fn default() -> Self {
        Self::new()
    }
}
