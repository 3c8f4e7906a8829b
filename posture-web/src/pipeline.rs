//! Frame pipeline: Validator → Scorer → Classifier → Smoother
//!
//! `evaluate` is pure. `evaluate_and_smooth` additionally threads a
//! caller-owned `SmootherState`. Every call is O(1) and allocation-free, so
//! hosts can run it on every camera frame and throttle on their side.

use crate::classifier::{Classifier, Sensitivity};
use crate::config::PostureConfig;
use crate::error::ConfigError;
use crate::landmarks::Landmark;
use crate::result::PostureResult;
use crate::scorer::GeometricScorer;
use crate::smoother::{DisplaySnapshot, Smoother, SmootherState};
use crate::validator::{IgnoreReason, LandmarkValidator, Outcome};

/// All four stages built from one configuration
pub struct PosturePipeline {
    config: PostureConfig,
    validator: LandmarkValidator,
    scorer: GeometricScorer,
    classifier: Classifier,
    smoother: Smoother,
}

impl PosturePipeline {
    /// Validate `config` and build the stages from it
    pub fn new(config: PostureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: PostureConfig) -> Self {
        Self {
            validator: LandmarkValidator::new(&config.validator, config.layout),
            scorer: GeometricScorer::new(&config.scorer, config.layout),
            classifier: Classifier::new(&config.classifier),
            smoother: Smoother::new(&config.smoother),
            config,
        }
    }

    /// Score one frame. Same inputs, same result.
    pub fn evaluate(&self, frame: &[Landmark], sensitivity: impl Into<Sensitivity>) -> PostureResult {
        if let Outcome::Ignore(reason) = self.validator.validate(frame) {
            tracing::debug!(reason = reason.as_str(), "frame ignored");
            return PostureResult::ignored(reason);
        }

        let Some(metrics) = self.scorer.score(frame) else {
            tracing::debug!("degenerate geometry, frame ignored");
            return PostureResult::ignored(IgnoreReason::NoUser);
        };

        let classification = self.classifier.classify(&metrics, sensitivity.into());
        PostureResult::scored(metrics, classification)
    }

    /// Score one frame and fold it into `state`
    pub fn evaluate_and_smooth(
        &self,
        state: &mut SmootherState,
        frame: &[Landmark],
        sensitivity: impl Into<Sensitivity>,
    ) -> (PostureResult, DisplaySnapshot) {
        let result = self.evaluate(frame, sensitivity);
        let snapshot = self.smoother.update(state, &result);
        (result, snapshot)
    }

    pub fn config(&self) -> &PostureConfig {
        &self.config
    }

    pub fn smoother(&self) -> &Smoother {
        &self.smoother
    }
}

impl Default for PosturePipeline {
    fn default() -> Self {
        Self::from_valid(PostureConfig::default())
    }
}

/// Score one frame with the default configuration
pub fn evaluate(frame: &[Landmark], sensitivity: impl Into<Sensitivity>) -> PostureResult {
    PosturePipeline::default().evaluate(frame, sensitivity)
}

/// Score one frame with the default configuration and fold it into `state`
pub fn evaluate_and_smooth(
    state: &mut SmootherState,
    frame: &[Landmark],
    sensitivity: impl Into<Sensitivity>,
) -> (PostureResult, DisplaySnapshot) {
    PosturePipeline::default().evaluate_and_smooth(state, frame, sensitivity)
}
