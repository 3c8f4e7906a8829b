//! Frame usability checks
//!
//! Applied in order, first match wins:
//! 1. Completeness - nose, both ears and both shoulders present
//! 2. Confidence - both shoulders visible enough
//! 3. Occlusion - a confident wrist above the nose (hand near face)
//! 4. Head turn - nose outside the span of the ears

use crate::config::ValidatorConfig;
use crate::landmarks::{Body, Keypoint, Landmark, LandmarkLayout};

use super::confidence_gate::ConfidenceGate;
use super::outcome::{IgnoreReason, Outcome};

pub struct LandmarkValidator {
    layout: LandmarkLayout,
    shoulder_gate: ConfidenceGate,
    wrist_gate: ConfidenceGate,
}

impl LandmarkValidator {
    pub fn new(config: &ValidatorConfig, layout: LandmarkLayout) -> Self {
        Self {
            layout,
            shoulder_gate: ConfidenceGate::at_least(config.min_shoulder_visibility),
            wrist_gate: ConfidenceGate::above(config.min_wrist_visibility),
        }
    }

    pub fn validate(&self, frame: &[Landmark]) -> Outcome {
        let body = Body::new(frame, self.layout);

        let (Some(nose), Some((left_ear, right_ear)), Some((left_shoulder, right_shoulder))) = (
            body.get(Keypoint::Nose),
            body.pair(Keypoint::LeftEar, Keypoint::RightEar),
            body.pair(Keypoint::LeftShoulder, Keypoint::RightShoulder),
        ) else {
            return Outcome::Ignore(IgnoreReason::NoUser);
        };

        if !self.shoulder_gate.passes(left_shoulder) || !self.shoulder_gate.passes(right_shoulder) {
            return Outcome::Ignore(IgnoreReason::AdjustCamera);
        }

        // y grows downward: a smaller y is higher in the frame
        let hand_raised = [Keypoint::LeftWrist, Keypoint::RightWrist]
            .into_iter()
            .filter_map(|kp| body.get(kp))
            .any(|wrist| self.wrist_gate.passes(wrist) && wrist.y < nose.y);
        if hand_raised {
            return Outcome::Ignore(IgnoreReason::HandNearFace);
        }

        let ear_min = left_ear.x.min(right_ear.x);
        let ear_max = left_ear.x.max(right_ear.x);
        if nose.x < ear_min || nose.x > ear_max {
            return Outcome::Ignore(IgnoreReason::LookingAway);
        }

        Outcome::Proceed
    }
}

impl Default for LandmarkValidator {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default(), LandmarkLayout::default())
    }
}
