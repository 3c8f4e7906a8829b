//! Geometric sub-scores
//!
//! Each sub-score starts at 100 and loses a fixed number of points per unit
//! of misalignment, then is clamped to [score_floor, 100]:
//! - Neck: ear midpoint → shoulder midpoint, deviation from vertical
//! - Shoulders: height difference between the two shoulders (levelness)
//! - Spine: shoulder midpoint → hip midpoint, deviation from vertical;
//!   falls back to the shoulder score when hips are not usable
//!
//! The floor keeps a detected-but-slouching user visibly above zero, which
//! is reserved for "nobody there" on the display side.

use crate::config::ScorerConfig;
use crate::geometry::{midpoint, vertical_deviation};
use crate::landmarks::{Body, Keypoint, Landmark, LandmarkLayout};
use crate::validator::ConfidenceGate;

use super::metrics::PostureMetrics;

pub struct GeometricScorer {
    layout: LandmarkLayout,
    config: ScorerConfig,
    hip_gate: ConfidenceGate,
}

impl GeometricScorer {
    pub fn new(config: &ScorerConfig, layout: LandmarkLayout) -> Self {
        Self {
            layout,
            config: config.clone(),
            hip_gate: ConfidenceGate::at_least(config.min_hip_visibility),
        }
    }

    /// Score a frame the validator accepted.
    ///
    /// Returns `None` when the neck segment has no direction (ears and
    /// shoulders collapse onto one point) or the geometry is not finite.
    pub fn score(&self, frame: &[Landmark]) -> Option<PostureMetrics> {
        let body = Body::new(frame, self.layout);
        let (left_ear, right_ear) = body.pair(Keypoint::LeftEar, Keypoint::RightEar)?;
        let (left_shoulder, right_shoulder) =
            body.pair(Keypoint::LeftShoulder, Keypoint::RightShoulder)?;

        let ear_mid = midpoint(left_ear, right_ear);
        let shoulder_mid = midpoint(left_shoulder, right_shoulder);

        let neck_deviation = vertical_deviation(ear_mid, shoulder_mid, self.config.aspect_ratio)?;
        let neck = self.penalize(neck_deviation * self.config.neck_penalty);

        let shoulder_units = (left_shoulder.y - right_shoulder.y).abs() * self.config.shoulder_scale;
        let shoulders = self.penalize(shoulder_units * self.config.shoulder_penalty);

        let spine = self
            .hip_midpoint(&body)
            .and_then(|hip_mid| vertical_deviation(shoulder_mid, hip_mid, self.config.aspect_ratio))
            .map(|deviation| self.penalize(deviation * self.config.spine_penalty))
            .unwrap_or(shoulders);

        PostureMetrics::from_scores(neck, shoulders, spine)
    }

    fn hip_midpoint(&self, body: &Body<'_>) -> Option<nalgebra::Vector2<f32>> {
        let (left_hip, right_hip) = body.pair(Keypoint::LeftHip, Keypoint::RightHip)?;
        if !self.hip_gate.passes(left_hip) || !self.hip_gate.passes(right_hip) {
            return None;
        }
        Some(midpoint(left_hip, right_hip))
    }

    /// 100 minus `penalty`, kept inside [score_floor, 100]
    fn penalize(&self, penalty: f32) -> f32 {
        (100.0 - penalty).max(self.config.score_floor).min(100.0)
    }
}

impl Default for GeometricScorer {
    fn default() -> Self {
        Self::new(&ScorerConfig::default(), LandmarkLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FrameBuilder;

    fn score(frame: &[Landmark]) -> PostureMetrics {
        GeometricScorer::default().score(frame).unwrap()
    }

    #[test]
    fn upright_is_perfect() {
        assert_eq!(score(&FrameBuilder::upright().build()), PostureMetrics::PERFECT);
    }

    #[test]
    fn forward_head_costs_neck_points() {
        // atan(0.02 × 4/3 / 0.18) = 8.43° → 100 - 25.3
        let m = score(&FrameBuilder::upright().shift_ears(0.02).build());
        assert_eq!(m.neck, 75);
        assert_eq!(m.shoulders, 100);
        assert_eq!(m.spine, 100);
    }

    #[test]
    fn uneven_shoulders() {
        // 0.01 × 1000 × 0.8 = 8 points
        let m = score(
            &FrameBuilder::upright()
                .place(Keypoint::RightShoulder, 0.38, 0.51, 0.95)
                .build(),
        );
        assert_eq!(m.shoulders, 92);
    }

    #[test]
    fn leaning_torso_costs_spine_points() {
        // atan(0.05 × 4/3 / 0.35) = 10.78° → 100 - 21.6
        let m = score(
            &FrameBuilder::upright()
                .place(Keypoint::LeftHip, 0.63, 0.85, 0.9)
                .place(Keypoint::RightHip, 0.47, 0.85, 0.9)
                .build(),
        );
        assert_eq!(m.spine, 78);
        assert_eq!(m.neck, 100);
    }

    #[test]
    fn severe_misalignment_hits_floor() {
        let m = score(&FrameBuilder::upright().shift_ears(0.3).build());
        assert_eq!(m.neck, 20);
    }

    #[test]
    fn missing_hips_fall_back_to_shoulders() {
        let m = score(
            &FrameBuilder::upright()
                .place(Keypoint::RightShoulder, 0.38, 0.53, 0.95)
                .remove(Keypoint::LeftHip)
                .remove(Keypoint::RightHip)
                .build(),
        );
        assert_eq!(m.spine, m.shoulders);
        assert!(m.shoulders < 100);
    }

    #[test]
    fn dim_hips_fall_back_to_shoulders() {
        let m = score(
            &FrameBuilder::upright()
                .place(Keypoint::RightShoulder, 0.38, 0.52, 0.95)
                .visibility(Keypoint::LeftHip, 0.3)
                .build(),
        );
        assert_eq!(m.spine, m.shoulders);
    }

    #[test]
    fn collapsed_neck_has_no_score() {
        let frame = FrameBuilder::upright()
            .place(Keypoint::LeftEar, 0.62, 0.50, 0.9)
            .place(Keypoint::RightEar, 0.38, 0.50, 0.9)
            .build();
        assert!(GeometricScorer::default().score(&frame).is_none());
    }

    #[test]
    fn aspect_ratio_is_configurable() {
        let square = ScorerConfig {
            aspect_ratio: 1.0,
            ..ScorerConfig::default()
        };
        let frame = FrameBuilder::upright().shift_ears(0.02).build();
        let m = GeometricScorer::new(&square, LandmarkLayout::BlazePose)
            .score(&frame)
            .unwrap();
        // atan(0.02 / 0.18) = 6.34° → 100 - 19.0
        assert_eq!(m.neck, 81);
    }
}
