//! User sensitivity level (1-10)
//!
//! Comes from a live settings slider and is re-read every frame, so
//! out-of-range values are clamped rather than rejected.

use serde::{Deserialize, Serialize};

pub const MIN_SENSITIVITY: u8 = 1;
pub const MAX_SENSITIVITY: u8 = 10;

/// Sensitivity level, always within 1..=10
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct Sensitivity(u8);

impl Sensitivity {
    pub fn new(level: i32) -> Self {
        let clamped = level.clamp(MIN_SENSITIVITY as i32, MAX_SENSITIVITY as i32);
        if clamped != level {
            tracing::debug!(level, clamped, "sensitivity out of range, clamping");
        }
        Sensitivity(clamped as u8)
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Sensitivity(5)
    }
}

impl From<i32> for Sensitivity {
    fn from(level: i32) -> Self {
        Sensitivity::new(level)
    }
}

impl From<u8> for Sensitivity {
    fn from(level: u8) -> Self {
        Sensitivity::new(level as i32)
    }
}

impl From<Sensitivity> for u8 {
    fn from(s: Sensitivity) -> Self {
        s.0
    }
}
