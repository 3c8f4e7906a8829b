//! Posture Web - real-time sitting posture scoring
//!
//! Turns one frame of pose landmarks into a posture verdict:
//! - validator: is the frame usable at all
//! - scorer: neck, shoulder and spine sub-scores from geometry
//! - classifier: weighted global score against a sensitivity threshold
//! - smoother: display score, momentum and slouch time across frames
//!
//! The core is plain Rust. `bridge` holds the wasm_bindgen entry points.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod config;
pub mod error;
pub mod landmarks;
pub mod geometry;
pub mod validator;
pub mod scorer;
pub mod classifier;
pub mod result;
pub mod smoother;
pub mod pipeline;
pub mod tracker;
pub mod latest;
mod bridge;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests_proptest;

pub use classifier::{Classification, Issue, Sensitivity};
pub use config::PostureConfig;
pub use error::{ConfigError, PostureError};
pub use landmarks::{landmarks_from_flat, normalize_pixels, Landmark, LandmarkLayout};
pub use latest::LatestSlot;
pub use pipeline::{evaluate, evaluate_and_smooth, PosturePipeline};
pub use result::{PostureResult, Reason};
pub use scorer::PostureMetrics;
pub use smoother::{DisplaySnapshot, Session, SessionSummary, SmootherState};
pub use tracker::Tracker;
pub use validator::IgnoreReason;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    configure, current_config, evaluate_frame, evaluate_once, get_sensitivity, is_tracking,
    normalize_landmarks, set_sensitivity, start_session, stop_session, FrameReport,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
