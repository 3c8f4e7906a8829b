//! Validator verdicts

use serde::{Deserialize, Serialize};

/// Why a frame carries no posture opinion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Nose, ears or shoulders missing
    NoUser,
    /// Shoulders detected with too little confidence
    AdjustCamera,
    /// A raised wrist is above the nose
    HandNearFace,
    /// Nose outside the span of the ears (head turned)
    LookingAway,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::NoUser => "no_user",
            IgnoreReason::AdjustCamera => "adjust_camera",
            IgnoreReason::HandNearFace => "hand_near_face",
            IgnoreReason::LookingAway => "looking_away",
        }
    }

    /// User-facing text shown while the frame is ignored
    pub fn message(&self) -> &'static str {
        match self {
            IgnoreReason::NoUser => "No User Detected",
            IgnoreReason::AdjustCamera => "Adjust Camera",
            IgnoreReason::HandNearFace => "Hand Near Face",
            IgnoreReason::LookingAway => "Looking Away",
        }
    }
}

/// Validator verdict for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Proceed,
    Ignore(IgnoreReason),
}
