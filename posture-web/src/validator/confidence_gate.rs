//! Confidence Gate - visibility threshold for a single landmark
//!
//! Shoulders pass at exactly the threshold; wrists must exceed it before
//! they count as raised. The gate carries which comparison applies.

use crate::landmarks::Landmark;

/// Visibility gate for one class of landmark
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceGate {
    /// Minimum confidence to accept the landmark
    threshold: f32,
    /// Whether a visibility equal to the threshold passes
    inclusive: bool,
}

impl ConfidenceGate {
    /// Passes when visibility >= threshold
    pub fn at_least(threshold: f32) -> Self {
        Self { threshold, inclusive: true }
    }

    /// Passes when visibility > threshold
    pub fn above(threshold: f32) -> Self {
        Self { threshold, inclusive: false }
    }

    /// Apply the gate. Non-finite landmarks never pass.
    pub fn passes(&self, landmark: &Landmark) -> bool {
        if !landmark.is_finite() {
            return false;
        }
        if self.inclusive {
            landmark.visibility >= self.threshold
        } else {
            landmark.visibility > self.threshold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_gate_accepts_boundary() {
        let gate = ConfidenceGate::at_least(0.2);
        assert!(gate.passes(&Landmark::at(0.5, 0.5, 0.2)));
        assert!(!gate.passes(&Landmark::at(0.5, 0.5, 0.19)));
    }

    #[test]
    fn strict_gate_rejects_boundary() {
        let gate = ConfidenceGate::above(0.2);
        assert!(!gate.passes(&Landmark::at(0.5, 0.5, 0.2)));
        assert!(gate.passes(&Landmark::at(0.5, 0.5, 0.21)));
    }

    #[test]
    fn nan_never_passes() {
        let gate = ConfidenceGate::at_least(0.0);
        assert!(!gate.passes(&Landmark::at(0.5, 0.5, f32::NAN)));
    }
}
