//! Frame fixtures shared by unit tests

use crate::landmarks::{Keypoint, Landmark, LandmarkLayout};

/// Builds a frame starting from a seated user in perfect posture:
/// ears straight above the shoulders, level shoulders, hips straight below.
pub struct FrameBuilder {
    layout: LandmarkLayout,
    frame: Vec<Landmark>,
}

impl FrameBuilder {
    pub fn upright() -> Self {
        Self::upright_for(LandmarkLayout::BlazePose)
    }

    pub fn upright_for(layout: LandmarkLayout) -> Self {
        let builder = Self {
            layout,
            frame: vec![Landmark::default(); layout.point_count()],
        };
        builder
            .place(Keypoint::Nose, 0.50, 0.30, 0.99)
            .place(Keypoint::LeftEar, 0.55, 0.32, 0.90)
            .place(Keypoint::RightEar, 0.45, 0.32, 0.90)
            .place(Keypoint::LeftShoulder, 0.62, 0.50, 0.95)
            .place(Keypoint::RightShoulder, 0.38, 0.50, 0.95)
            .place(Keypoint::LeftWrist, 0.66, 0.90, 0.80)
            .place(Keypoint::RightWrist, 0.34, 0.90, 0.80)
            .place(Keypoint::LeftHip, 0.58, 0.85, 0.90)
            .place(Keypoint::RightHip, 0.42, 0.85, 0.90)
    }

    pub fn place(mut self, keypoint: Keypoint, x: f32, y: f32, visibility: f32) -> Self {
        let idx = self.layout.indices().index_of(keypoint);
        self.frame[idx] = Landmark::at(x, y, visibility);
        self
    }

    pub fn visibility(mut self, keypoint: Keypoint, visibility: f32) -> Self {
        let idx = self.layout.indices().index_of(keypoint);
        self.frame[idx].visibility = visibility;
        self
    }

    /// Mark a landmark as not detected
    pub fn remove(mut self, keypoint: Keypoint) -> Self {
        let idx = self.layout.indices().index_of(keypoint);
        self.frame[idx] = Landmark::at(f32::NAN, f32::NAN, 0.0);
        self
    }

    /// Move both ears horizontally by `dx` (forward head when dx != 0)
    pub fn shift_ears(self, dx: f32) -> Self {
        let idx = *self.layout.indices();
        let (le, re) = (self.frame[idx.left_ear], self.frame[idx.right_ear]);
        let nose = self.frame[idx.nose];
        self.place(Keypoint::LeftEar, le.x + dx, le.y, le.visibility)
            .place(Keypoint::RightEar, re.x + dx, re.y, re.visibility)
            .place(Keypoint::Nose, nose.x + dx, nose.y, nose.visibility)
    }

    pub fn build(self) -> Vec<Landmark> {
        self.frame
    }
}
