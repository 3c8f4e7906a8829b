//! Geometry module - midpoints and vertical alignment angles
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::{midpoint, vertical_deviation, MIN_SEGMENT_LENGTH};
