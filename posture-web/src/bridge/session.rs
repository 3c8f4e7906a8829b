//! Tracking session bridge - owns the tracker for the page
//!
//! JS drives the frame loop: `start_session`, `evaluate_frame` once per
//! detector result, `stop_session` for the JSON summary.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::classifier::Sensitivity;
use crate::config::PostureConfig;
use crate::landmarks::Landmark;
use crate::tracker::Tracker;

use super::landmarks::parse_normalized;
use super::report::FrameReport;

#[derive(Default)]
struct BridgeState {
    tracker: Tracker,
    /// `Date.now()` at session start, milliseconds
    started_at_ms: Option<f64>,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static BRIDGE: RefCell<BridgeState> = RefCell::new(BridgeState::default());
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Replace the configuration from a TOML document. Missing keys keep defaults.
#[wasm_bindgen]
pub fn configure(toml_text: &str) -> Result<(), JsValue> {
    let config = PostureConfig::from_toml_str(toml_text)?;
    BRIDGE.with(|cell| cell.borrow_mut().tracker.configure(config))?;
    web_sys::console::log_1(&"✅ Posture config applied".into());
    Ok(())
}

/// Current configuration as TOML
#[wasm_bindgen]
pub fn current_config() -> Result<String, JsValue> {
    BRIDGE.with(|cell| {
        cell.borrow()
            .tracker
            .config()
            .to_toml_string()
            .map_err(JsValue::from)
    })
}

#[wasm_bindgen]
pub fn set_sensitivity(level: i32) {
    BRIDGE.with(|cell| cell.borrow_mut().tracker.set_sensitivity(level));
}

#[wasm_bindgen]
pub fn get_sensitivity() -> u8 {
    BRIDGE.with(|cell| cell.borrow().tracker.sensitivity().level())
}

// ============================================================================
// SESSION
// ============================================================================

#[wasm_bindgen]
pub fn start_session() {
    BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();
        state.tracker.start_session();
        state.started_at_ms = Some(js_sys::Date::now());
    });
    console_log!("▶️ Posture session started");
}

/// Stop tracking and return the session summary as JSON.
///
/// `wall_clock_secs` is measured with `Date.now()`; the other durations are
/// frame-based.
#[wasm_bindgen]
pub fn stop_session() -> Result<String, JsValue> {
    let (summary, started_at_ms) = BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();
        let summary = state.tracker.stop_session()?;
        Ok::<_, JsValue>((summary, state.started_at_ms.take()))
    })?;

    let mut value =
        serde_json::to_value(&summary).map_err(|err| JsValue::from_str(&err.to_string()))?;
    if let (Some(start), Some(map)) = (started_at_ms, value.as_object_mut()) {
        let wall_clock_secs = ((js_sys::Date::now() - start) / 1000.0).max(0.0);
        map.insert("wall_clock_secs".to_string(), serde_json::json!(wall_clock_secs));
    }

    console_log!(
        "⏹️ Posture session stopped: {} frames, average {:?}",
        summary.evaluated_frames,
        summary.average_score
    );
    Ok(value.to_string())
}

#[wasm_bindgen]
pub fn is_tracking() -> bool {
    BRIDGE.with(|cell| cell.borrow().tracker.is_tracking())
}

// ============================================================================
// FRAMES
// ============================================================================

/// Evaluate one frame into the live session (stride-4 normalized buffer)
#[wasm_bindgen]
pub fn evaluate_frame(data: &[f32]) -> Result<FrameReport, JsValue> {
    let frame = parse_normalized(data)?;
    BRIDGE.with(|cell| {
        let (result, snapshot) = cell.borrow_mut().tracker.process(&frame)?;
        Ok(FrameReport::new(&result, Some(&snapshot)))
    })
}

/// Evaluate one frame with the current configuration, no session involved
#[wasm_bindgen]
pub fn evaluate_once(data: &[f32], sensitivity: i32) -> Result<FrameReport, JsValue> {
    let frame = parse_normalized(data)?;
    Ok(BRIDGE.with(|cell| report_once(&cell.borrow().tracker, &frame, sensitivity)))
}

fn report_once(tracker: &Tracker, frame: &[Landmark], sensitivity: i32) -> FrameReport {
    let result = tracker.pipeline().evaluate(frame, Sensitivity::new(sensitivity));
    FrameReport::new(&result, None)
}
