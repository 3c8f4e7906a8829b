//! Vertical alignment angle using atan2
//!
//! Measures how far the segment between two body midpoints leans away
//! from straight down (90° in image coordinates, where y grows downward).

use nalgebra::Vector2;

use crate::landmarks::Landmark;

/// Segments shorter than this (after aspect correction) have no direction
pub const MIN_SEGMENT_LENGTH: f32 = 0.0001;

/// Reference angle of a segment pointing straight down the frame
const VERTICAL_DEG: f32 = 90.0;

/// Midpoint of a left/right landmark pair
pub fn midpoint(a: &Landmark, b: &Landmark) -> Vector2<f32> {
    (a.position() + b.position()) * 0.5
}

/// Deviation in degrees (0-180) of the segment `from`→`to` from vertical
///
/// Normalized x and y are not the same physical length on a non-square
/// frame, so dx is scaled by `aspect_ratio` before taking the angle:
/// angle = atan2(dy, dx × aspect_ratio)
///
/// Returns `None` for a degenerate segment or non-finite input.
pub fn vertical_deviation(from: Vector2<f32>, to: Vector2<f32>, aspect_ratio: f32) -> Option<f32> {
    let delta = to - from;
    let corrected = Vector2::new(delta.x * aspect_ratio, delta.y);

    // Handle degenerate case (also rejects NaN, since NaN < x is false)
    let length = corrected.norm();
    if !(length >= MIN_SEGMENT_LENGTH) {
        return None;
    }

    let angle = corrected.y.atan2(corrected.x).to_degrees();
    let deviation = (angle - VERTICAL_DEG).abs();

    // atan2 spans (-180°, 180°], so the raw difference can exceed a half turn
    let deviation = if deviation > 180.0 { 360.0 - deviation } else { deviation };

    deviation.is_finite().then_some(deviation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vector2<f32> {
        Vector2::new(x, y)
    }

    #[test]
    fn test_straight_down() {
        let dev = vertical_deviation(v(0.5, 0.2), v(0.5, 0.5), 4.0 / 3.0).unwrap();
        assert!(dev.abs() < 0.001);
    }

    #[test]
    fn test_diagonal() {
        // 45° lean on a square frame
        let dev = vertical_deviation(v(0.0, 0.0), v(0.1, 0.1), 1.0).unwrap();
        assert!((dev - 45.0).abs() < 0.01);
    }

    #[test]
    fn test_aspect_ratio_widens_lean() {
        // atan2(0.1, 0.1333) = 36.87°, 53.13° away from vertical
        let dev = vertical_deviation(v(0.0, 0.0), v(0.1, 0.1), 4.0 / 3.0).unwrap();
        assert!((dev - 53.13).abs() < 0.01);
    }

    #[test]
    fn test_horizontal_and_inverted() {
        let sideways = vertical_deviation(v(0.0, 0.5), v(0.3, 0.5), 1.0).unwrap();
        assert!((sideways - 90.0).abs() < 0.01);

        let upward = vertical_deviation(v(0.5, 0.5), v(0.5, 0.2), 1.0).unwrap();
        assert!((upward - 180.0).abs() < 0.01);

        // Up and to the left: raw difference would be 225°
        let up_left = vertical_deviation(v(0.5, 0.5), v(0.4, 0.4), 1.0).unwrap();
        assert!((up_left - 135.0).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_segment() {
        assert!(vertical_deviation(v(0.5, 0.5), v(0.5, 0.5), 4.0 / 3.0).is_none());
        assert!(vertical_deviation(v(0.5, 0.5), v(f32::NAN, 0.6), 1.0).is_none());
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(&Landmark::at(0.2, 0.4, 1.0), &Landmark::at(0.6, 0.6, 1.0));
        assert!((m.x - 0.4).abs() < 1e-6);
        assert!((m.y - 0.5).abs() < 1e-6);
    }
}
