//! Per-frame posture result

use serde::Serialize;

use crate::classifier::{Classification, Issue};
use crate::scorer::PostureMetrics;
use crate::validator::IgnoreReason;

/// Why the result looks the way it does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Reason {
    /// Posture passed the threshold
    None,
    /// Frame carried no usable signal; not evidence either way
    Ignore(IgnoreReason),
    /// Posture failed the threshold; the issue behind the message
    BadPosture(Issue),
}

/// Outcome of evaluating one frame. Fresh value every call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PostureResult {
    pub is_good: bool,
    pub score: u8,
    pub metrics: PostureMetrics,
    pub message: &'static str,
    pub reason: Reason,
}

impl PostureResult {
    /// Neutral result for a frame the pipeline has no opinion on
    pub fn ignored(reason: IgnoreReason) -> Self {
        Self {
            is_good: true,
            score: 100,
            metrics: PostureMetrics::PERFECT,
            message: reason.message(),
            reason: Reason::Ignore(reason),
        }
    }

    pub fn scored(metrics: PostureMetrics, classification: Classification) -> Self {
        let reason = match classification.issue {
            Some(issue) if !classification.is_good => Reason::BadPosture(issue),
            _ => Reason::None,
        };
        Self {
            is_good: classification.is_good,
            score: classification.score,
            metrics,
            message: classification.message,
            reason,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self.reason, Reason::Ignore(_))
    }

    pub fn ignore_reason(&self) -> Option<IgnoreReason> {
        match self.reason {
            Reason::Ignore(r) => Some(r),
            _ => None,
        }
    }
}
