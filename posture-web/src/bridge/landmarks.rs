//! Landmark buffers from JavaScript
//!
//! Pose detectors hand over a flat Float32Array per frame. Each point is
//! `x, y, z, visibility` (stride 4); BlazePose tensors may add a fifth
//! presence channel, which is skipped.

use wasm_bindgen::prelude::*;

use crate::landmarks::{landmarks_from_flat, normalize_pixels, Landmark, MIN_STRIDE};

/// Parse a flat landmark buffer, warning on the console when it is malformed
pub fn parse_frame(data: &[f32], stride: usize) -> Result<Vec<Landmark>, JsValue> {
    landmarks_from_flat(data, stride).map_err(|err| {
        web_sys::console::warn_1(
            &format!("⚠️ Invalid landmark buffer: {} values at stride {}", data.len(), stride).into(),
        );
        JsValue::from(err)
    })
}

/// Stride-4 buffer in normalized coordinates
pub fn parse_normalized(data: &[f32]) -> Result<Vec<Landmark>, JsValue> {
    parse_frame(data, MIN_STRIDE)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Convert a pixel-space buffer (MoveNet style) to normalized coordinates.
///
/// Returns `undefined` for a zero-sized video frame; skip that frame.
#[wasm_bindgen]
pub fn normalize_landmarks(data: &[f32], width: f32, height: f32) -> Result<Option<Vec<f32>>, JsValue> {
    let points = parse_normalized(data)?;
    let Some(normalized) = normalize_pixels(&points, width, height) else {
        web_sys::console::warn_1(&"⚠️ Video frame has no size yet, skipping".into());
        return Ok(None);
    };

    let flat = normalized
        .iter()
        .flat_map(|p| [p.x, p.y, p.z, p.visibility])
        .collect();
    Ok(Some(flat))
}
