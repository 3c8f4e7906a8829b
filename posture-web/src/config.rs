//! Tunable constants for every pipeline stage
//!
//! The penalty coefficients, weights and the sensitivity mapping were tuned
//! by eye against webcam footage. They are kept exactly for behavioural
//! compatibility but live here so they can be adjusted without touching
//! the formulas.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::landmarks::LandmarkLayout;

/// Allowed drift of the classifier weights from a sum of 1.0
const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PostureConfig {
    /// Index layout of incoming frames
    pub layout: LandmarkLayout,
    pub validator: ValidatorConfig,
    pub scorer: ScorerConfig,
    pub classifier: ClassifierConfig,
    pub smoother: SmootherConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Both shoulders need at least this visibility
    pub min_shoulder_visibility: f32,
    /// A wrist counts as raised only above this visibility
    pub min_wrist_visibility: f32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_shoulder_visibility: 0.2,
            min_wrist_visibility: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Source frame width / height; scales x before any angle is taken
    pub aspect_ratio: f32,
    /// Points lost per degree of neck deviation
    pub neck_penalty: f32,
    /// Multiplier turning normalized shoulder height difference into units
    pub shoulder_scale: f32,
    /// Points lost per unit of shoulder height difference
    pub shoulder_penalty: f32,
    /// Points lost per degree of spine deviation
    pub spine_penalty: f32,
    /// Hips below this visibility are treated as absent
    pub min_hip_visibility: f32,
    /// Lowest sub-score a detected user can get
    pub score_floor: f32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 4.0 / 3.0,
            neck_penalty: 3.0,
            shoulder_scale: 1000.0,
            shoulder_penalty: 0.8,
            spine_penalty: 2.0,
            min_hip_visibility: 0.5,
            score_floor: 20.0,
        }
    }
}

impl ScorerConfig {
    /// Default coefficients with the aspect ratio of a `width`x`height` capture.
    ///
    /// Falls back to the default ratio when either dimension is zero.
    pub fn for_frame(width: u32, height: u32) -> Self {
        let mut config = Self::default();
        if width > 0 && height > 0 {
            config.aspect_ratio = width as f32 / height as f32;
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub neck_weight: f32,
    pub spine_weight: f32,
    pub shoulder_weight: f32,
    /// Threshold at a (hypothetical) sensitivity of 0
    pub threshold_base: f32,
    /// Threshold increase per sensitivity level
    pub threshold_step: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            neck_weight: 0.45,
            spine_weight: 0.35,
            shoulder_weight: 0.20,
            threshold_base: 50.0,
            threshold_step: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmootherConfig {
    /// EMA factor applied to the display score and sub-metrics
    pub smoothing_factor: f32,
    /// Momentum gained per good frame
    pub momentum_gain: f32,
    /// Momentum lost per bad frame
    pub momentum_loss: f32,
    /// Nominal seconds per evaluated frame (~30 Hz cadence)
    pub frame_interval_secs: f32,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: 0.1,
            momentum_gain: 0.05,
            momentum_loss: 0.10,
            frame_interval_secs: 1.0 / 30.0,
        }
    }
}

impl PostureConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PostureConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded posture config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Validation(format!("cannot serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.validator;
        for (name, value) in [
            ("validator.min_shoulder_visibility", v.min_shoulder_visibility),
            ("validator.min_wrist_visibility", v.min_wrist_visibility),
            ("scorer.min_hip_visibility", self.scorer.min_hip_visibility),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Validation(format!("{} must be in [0, 1]", name)));
            }
        }

        let s = &self.scorer;
        if !(s.aspect_ratio.is_finite() && s.aspect_ratio > 0.0) {
            return Err(ConfigError::Validation(
                "scorer.aspect_ratio must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("scorer.neck_penalty", s.neck_penalty),
            ("scorer.shoulder_scale", s.shoulder_scale),
            ("scorer.shoulder_penalty", s.shoulder_penalty),
            ("scorer.spine_penalty", s.spine_penalty),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Validation(format!("{} must be non-negative", name)));
            }
        }
        if !(0.0..=100.0).contains(&s.score_floor) {
            return Err(ConfigError::Validation(
                "scorer.score_floor must be in [0, 100]".to_string(),
            ));
        }

        let c = &self.classifier;
        let weights = [c.neck_weight, c.spine_weight, c.shoulder_weight];
        if weights.iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
            return Err(ConfigError::Validation(
                "classifier weights must be non-negative".to_string(),
            ));
        }
        let sum: f32 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::Validation(format!(
                "classifier weights must sum to 1.0 (got {:.3})",
                sum
            )));
        }
        if !(c.threshold_base.is_finite() && c.threshold_step.is_finite() && c.threshold_step >= 0.0)
        {
            return Err(ConfigError::Validation(
                "classifier.threshold_step must be non-negative".to_string(),
            ));
        }

        let m = &self.smoother;
        if !(m.smoothing_factor > 0.0 && m.smoothing_factor <= 1.0) {
            return Err(ConfigError::Validation(
                "smoother.smoothing_factor must be in (0, 1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&m.momentum_gain) || !(0.0..=1.0).contains(&m.momentum_loss) {
            return Err(ConfigError::Validation(
                "smoother momentum steps must be in [0, 1]".to_string(),
            ));
        }
        if !(m.frame_interval_secs.is_finite() && m.frame_interval_secs > 0.0) {
            return Err(ConfigError::Validation(
                "smoother.frame_interval_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
