//! Per-frame report handed back to JavaScript

use wasm_bindgen::prelude::*;

use crate::result::{PostureResult, Reason};
use crate::smoother::DisplaySnapshot;

/// Flat view of a `PostureResult` and, when a session is live, the
/// matching `DisplaySnapshot`
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct FrameReport {
    pub is_good: bool,
    pub score: u8,
    pub neck: u8,
    pub shoulders: u8,
    pub spine: u8,
    pub ignored: bool,
    pub has_snapshot: bool,
    pub display_score: f32,
    pub momentum: f32,
    pub slouch_seconds: f32,
    message: &'static str,
    reason: &'static str,
}

impl FrameReport {
    pub fn new(result: &PostureResult, snapshot: Option<&DisplaySnapshot>) -> Self {
        let reason = match result.reason {
            Reason::None => "none",
            Reason::Ignore(r) => r.as_str(),
            Reason::BadPosture(issue) => issue.as_str(),
        };

        Self {
            is_good: result.is_good,
            score: result.score,
            neck: result.metrics.neck,
            shoulders: result.metrics.shoulders,
            spine: result.metrics.spine,
            ignored: result.is_ignored(),
            has_snapshot: snapshot.is_some(),
            display_score: snapshot.map_or(result.score as f32, |s| s.display_score),
            momentum: snapshot.map_or(0.0, |s| s.momentum),
            slouch_seconds: snapshot.map_or(0.0, |s| s.slouch_seconds),
            message: result.message,
            reason,
        }
    }
}

#[wasm_bindgen]
impl FrameReport {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.to_string()
    }

    /// "none", an ignore reason ("no_user", ...) or the failing metric ("neck", ...)
    #[wasm_bindgen(getter)]
    pub fn reason(&self) -> String {
        self.reason.to_string()
    }
}
