//! Global score and good/bad decision
//!
//! global = neck × 0.45 + spine × 0.35 + shoulders × 0.20
//! threshold = 50 + sensitivity × 4   (1 → 54, 10 → 90)
//!
//! The decision uses the unrounded total; only the reported score is rounded.

use crate::config::ClassifierConfig;
use crate::scorer::PostureMetrics;

use super::issue::{Issue, PERFECT_MESSAGE};
use super::sensitivity::Sensitivity;

/// Absorbs f32 error in the weighted sum so a total exactly at the
/// threshold (70 × 0.45 + 70 × 0.35 + 70 × 0.20) still passes
const THRESHOLD_EPSILON: f32 = 1e-3;

/// Classifier output for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// Rounded global score, 0-100
    pub score: u8,
    pub is_good: bool,
    pub message: &'static str,
    /// Lowest sub-score when posture is bad
    pub issue: Option<Issue>,
}

pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Weighted sum of the sub-scores (unrounded)
    pub fn global_score(&self, metrics: &PostureMetrics) -> f32 {
        metrics.neck as f32 * self.config.neck_weight
            + metrics.spine as f32 * self.config.spine_weight
            + metrics.shoulders as f32 * self.config.shoulder_weight
    }

    /// Minimum global score counted as good posture
    pub fn threshold(&self, sensitivity: Sensitivity) -> f32 {
        self.config.threshold_base + sensitivity.level() as f32 * self.config.threshold_step
    }

    pub fn classify(&self, metrics: &PostureMetrics, sensitivity: Sensitivity) -> Classification {
        let raw = self.global_score(metrics);
        let score = raw.round().clamp(0.0, 100.0) as u8;
        let is_good = raw + THRESHOLD_EPSILON >= self.threshold(sensitivity);

        if is_good {
            Classification {
                score,
                is_good,
                message: PERFECT_MESSAGE,
                issue: None,
            }
        } else {
            let issue = Issue::worst(metrics);
            Classification {
                score,
                is_good,
                message: issue.message(),
                issue: Some(issue),
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}
