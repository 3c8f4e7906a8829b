//! Keypoint lookup over a borrowed frame

use super::frame::Landmark;
use super::layout::{AnatomicalIndices, Keypoint, LandmarkLayout};

/// Read-only view of one frame through a layout
#[derive(Clone, Copy)]
pub struct Body<'a> {
    landmarks: &'a [Landmark],
    indices: &'static AnatomicalIndices,
}

impl<'a> Body<'a> {
    pub fn new(landmarks: &'a [Landmark], layout: LandmarkLayout) -> Self {
        Self {
            landmarks,
            indices: layout.indices(),
        }
    }

    /// Landmark for `keypoint` if the frame has it with finite values
    pub fn get(&self, keypoint: Keypoint) -> Option<&'a Landmark> {
        self.landmarks
            .get(self.indices.index_of(keypoint))
            .filter(|lm| lm.is_finite())
    }

    /// Both landmarks of a left/right pair
    pub fn pair(&self, left: Keypoint, right: Keypoint) -> Option<(&'a Landmark, &'a Landmark)> {
        Some((self.get(left)?, self.get(right)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::BLAZEPOSE;

    #[test]
    fn short_frame_has_no_hips() {
        let frame = vec![Landmark::at(0.5, 0.5, 1.0); 17];
        let body = Body::new(&frame, LandmarkLayout::BlazePose);
        assert!(body.get(Keypoint::LeftShoulder).is_some());
        assert!(body.get(Keypoint::LeftHip).is_none());

        let body = Body::new(&frame, LandmarkLayout::MoveNet);
        assert!(body.get(Keypoint::LeftHip).is_some());
    }

    #[test]
    fn nan_landmark_is_absent() {
        let mut frame = vec![Landmark::at(0.5, 0.5, 1.0); 33];
        frame[BLAZEPOSE.nose] = Landmark::at(f32::NAN, 0.5, 1.0);
        let body = Body::new(&frame, LandmarkLayout::BlazePose);
        assert!(body.get(Keypoint::Nose).is_none());
        assert!(body.pair(Keypoint::LeftEar, Keypoint::RightEar).is_some());
    }
}
