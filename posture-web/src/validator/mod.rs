//! Validator module - cheap rejections that run before any trigonometry
//!
//! Re-exports only. All logic in submodules.

mod outcome;
mod confidence_gate;
mod checks;

pub use outcome::{IgnoreReason, Outcome};
pub use confidence_gate::ConfidenceGate;
pub use checks::LandmarkValidator;
