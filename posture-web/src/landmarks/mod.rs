//! Landmark module - frame data, index layouts and buffer conversion
//!
//! Re-exports only. All logic in submodules.

mod frame;
mod layout;
mod body;

pub use frame::{Landmark, landmarks_from_flat, normalize_pixels, MIN_STRIDE};
pub use layout::{AnatomicalIndices, Keypoint, LandmarkLayout, BLAZEPOSE, MOVENET};
pub use body::Body;
