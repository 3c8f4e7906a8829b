//! Sub-score triple shared by scorer, classifier and smoother

use serde::{Deserialize, Serialize};

/// Neck, shoulder and spine alignment, each 0-100
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostureMetrics {
    pub neck: u8,
    pub shoulders: u8,
    pub spine: u8,
}

impl PostureMetrics {
    pub const PERFECT: PostureMetrics = PostureMetrics {
        neck: 100,
        shoulders: 100,
        spine: 100,
    };

    /// Values above 100 are clamped
    pub fn new(neck: u8, shoulders: u8, spine: u8) -> Self {
        Self {
            neck: neck.min(100),
            shoulders: shoulders.min(100),
            spine: spine.min(100),
        }
    }

    /// Round float scores into a triple; `None` if any score is not finite
    pub fn from_scores(neck: f32, shoulders: f32, spine: f32) -> Option<Self> {
        Some(Self {
            neck: to_score(neck)?,
            shoulders: to_score(shoulders)?,
            spine: to_score(spine)?,
        })
    }
}

impl Default for PostureMetrics {
    fn default() -> Self {
        Self::PERFECT
    }
}

fn to_score(value: f32) -> Option<u8> {
    value
        .is_finite()
        .then(|| value.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_and_clamps() {
        let m = PostureMetrics::from_scores(99.5, -3.0, 250.0).unwrap();
        assert_eq!(m, PostureMetrics::new(100, 0, 100));
    }

    #[test]
    fn rejects_nan() {
        assert!(PostureMetrics::from_scores(f32::NAN, 50.0, 50.0).is_none());
    }

    #[test]
    fn new_caps_at_100() {
        assert_eq!(PostureMetrics::new(120, 80, 255), PostureMetrics::new(100, 80, 100));
    }
}
