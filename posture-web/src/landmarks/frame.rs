//! Landmark data structure and buffer conversion
//!
//! Pose models hand landmarks over either as a flat float buffer
//! (x, y, z, visibility per point) or as pixel-space keypoints that still
//! need normalizing against the capture size.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::PostureError;

/// Minimum channels per landmark in a flat buffer: x, y, z, visibility
pub const MIN_STRIDE: usize = 4;

/// A single landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized, left to right
    pub y: f32,          // 0-1 normalized, grows downward
    pub z: f32,          // Relative depth
    pub visibility: f32, // 0-1 confidence
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// 2D landmark with zero depth
    pub fn at(x: f32, y: f32, visibility: f32) -> Self {
        Self::new(x, y, 0.0, visibility)
    }

    /// Position and confidence are usable numbers. Depth is never read.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.visibility.is_finite()
    }

    pub fn position(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

/// Parse a flat buffer of `stride` floats per landmark.
///
/// The first four channels are x, y, z, visibility; anything after that
/// (e.g. a presence score) is skipped.
pub fn landmarks_from_flat(data: &[f32], stride: usize) -> Result<Vec<Landmark>, PostureError> {
    if stride < MIN_STRIDE {
        return Err(PostureError::precondition(format!(
            "landmark stride {} is below the minimum of {}",
            stride, MIN_STRIDE
        )));
    }
    if data.len() % stride != 0 {
        return Err(PostureError::precondition(format!(
            "landmark buffer length {} is not a multiple of stride {}",
            data.len(),
            stride
        )));
    }

    Ok(data
        .chunks_exact(stride)
        .map(|c| Landmark::new(c[0], c[1], c[2], c[3]))
        .collect())
}

/// Convert pixel-space keypoints to normalized coordinates.
///
/// Returns `None` for a zero-sized frame; the caller should skip it.
pub fn normalize_pixels(points: &[Landmark], width: f32, height: f32) -> Option<Vec<Landmark>> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }

    Some(
        points
            .iter()
            .map(|p| Landmark::new(p.x / width, p.y / height, p.z, p.visibility))
            .collect(),
    )
}
