//! Classifier module - weighted global score, sensitivity threshold and
//! corrective message selection
//!
//! Re-exports only. All logic in submodules.

mod sensitivity;
mod issue;
mod classify;

pub use sensitivity::{Sensitivity, MAX_SENSITIVITY, MIN_SENSITIVITY};
pub use issue::{Issue, ISSUE_PRIORITY, PERFECT_MESSAGE};
pub use classify::{Classification, Classifier};
