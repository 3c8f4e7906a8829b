//! Landmark index layouts
//!
//! Index meaning is a contract with the pose model, never inferred per
//! frame. BlazePose emits 33 points, MoveNet 17.

use serde::{Deserialize, Serialize};

// ============================================================================
// KEYPOINTS
// ============================================================================

/// Anatomical points the posture pipeline reads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keypoint {
    Nose,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
}

impl Keypoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keypoint::Nose => "nose",
            Keypoint::LeftEar => "left_ear",
            Keypoint::RightEar => "right_ear",
            Keypoint::LeftShoulder => "left_shoulder",
            Keypoint::RightShoulder => "right_shoulder",
            Keypoint::LeftWrist => "left_wrist",
            Keypoint::RightWrist => "right_wrist",
            Keypoint::LeftHip => "left_hip",
            Keypoint::RightHip => "right_hip",
        }
    }
}

// ============================================================================
// LANDMARK INDICES
// ============================================================================

/// Frame index of each keypoint for one model
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnatomicalIndices {
    pub nose: usize,
    pub left_ear: usize,
    pub right_ear: usize,
    pub left_shoulder: usize,
    pub right_shoulder: usize,
    pub left_wrist: usize,
    pub right_wrist: usize,
    pub left_hip: usize,
    pub right_hip: usize,
}

/// MediaPipe BlazePose (33 total)
pub const BLAZEPOSE: AnatomicalIndices = AnatomicalIndices {
    nose: 0,
    left_ear: 7,
    right_ear: 8,
    left_shoulder: 11,
    right_shoulder: 12,
    left_wrist: 15,
    right_wrist: 16,
    left_hip: 23,
    right_hip: 24,
};

/// TensorFlow MoveNet (17 total, COCO order)
pub const MOVENET: AnatomicalIndices = AnatomicalIndices {
    nose: 0,
    left_ear: 3,
    right_ear: 4,
    left_shoulder: 5,
    right_shoulder: 6,
    left_wrist: 9,
    right_wrist: 10,
    left_hip: 11,
    right_hip: 12,
};

impl AnatomicalIndices {
    pub fn index_of(&self, keypoint: Keypoint) -> usize {
        match keypoint {
            Keypoint::Nose => self.nose,
            Keypoint::LeftEar => self.left_ear,
            Keypoint::RightEar => self.right_ear,
            Keypoint::LeftShoulder => self.left_shoulder,
            Keypoint::RightShoulder => self.right_shoulder,
            Keypoint::LeftWrist => self.left_wrist,
            Keypoint::RightWrist => self.right_wrist,
            Keypoint::LeftHip => self.left_hip,
            Keypoint::RightHip => self.right_hip,
        }
    }
}

/// Which pose model produced the frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandmarkLayout {
    #[default]
    BlazePose,
    MoveNet,
}

impl LandmarkLayout {
    pub fn indices(self) -> &'static AnatomicalIndices {
        match self {
            LandmarkLayout::BlazePose => &BLAZEPOSE,
            LandmarkLayout::MoveNet => &MOVENET,
        }
    }

    /// Number of landmarks the model emits per frame
    pub fn point_count(self) -> usize {
        match self {
            LandmarkLayout::BlazePose => 33,
            LandmarkLayout::MoveNet => 17,
        }
    }
}
