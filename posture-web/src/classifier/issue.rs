//! Corrective issues and their messages

use serde::{Deserialize, Serialize};

use crate::scorer::PostureMetrics;

/// Message shown when posture passes the threshold
pub const PERFECT_MESSAGE: &str = "Perfect Posture";

/// Which sub-score needs fixing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    Neck,
    Spine,
    Shoulders,
}

/// Tie-break order when sub-scores are equal: the most correctable first
pub const ISSUE_PRIORITY: [Issue; 3] = [Issue::Neck, Issue::Spine, Issue::Shoulders];

impl Issue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Issue::Neck => "neck",
            Issue::Spine => "spine",
            Issue::Shoulders => "shoulders",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Issue::Neck => "Lift Your Head!",
            Issue::Spine => "Sit Up Straight!",
            Issue::Shoulders => "Fix Shoulders!",
        }
    }

    /// The sub-score this issue is read from
    pub fn value_in(&self, metrics: &PostureMetrics) -> u8 {
        match self {
            Issue::Neck => metrics.neck,
            Issue::Spine => metrics.spine,
            Issue::Shoulders => metrics.shoulders,
        }
    }

    /// Lowest sub-score; ties go to the earlier entry of `ISSUE_PRIORITY`
    pub fn worst(metrics: &PostureMetrics) -> Issue {
        let mut worst = ISSUE_PRIORITY[0];
        for issue in &ISSUE_PRIORITY[1..] {
            if issue.value_in(metrics) < worst.value_in(metrics) {
                worst = *issue;
            }
        }
        worst
    }
}
