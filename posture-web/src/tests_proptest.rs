//! Property-based checks over random landmark frames

use proptest::prelude::*;

use crate::classifier::{Classifier, Sensitivity};
use crate::landmarks::{Keypoint, Landmark};
use crate::pipeline::{evaluate, evaluate_and_smooth};
use crate::result::PostureResult;
use crate::scorer::PostureMetrics;
use crate::smoother::{Smoother, SmootherState};
use crate::test_support::FrameBuilder;
use crate::validator::IgnoreReason;

fn landmark() -> impl Strategy<Value = Landmark> {
    (-0.5f32..1.5, -0.5f32..1.5, -1.0f32..1.0, 0.0f32..=1.0)
        .prop_map(|(x, y, z, visibility)| Landmark::new(x, y, z, visibility))
}

/// Mostly-sane frames with occasional undetected points
fn frame() -> impl Strategy<Value = Vec<Landmark>> {
    prop::collection::vec(
        prop_oneof![
            9 => landmark(),
            1 => Just(Landmark::new(f32::NAN, f32::NAN, 0.0, 0.0)),
        ],
        0..40,
    )
}

/// Upright frame with the head and shoulders perturbed, so most cases score
fn perturbed_upright() -> impl Strategy<Value = Vec<Landmark>> {
    (-0.2f32..0.2, -0.05f32..0.05, -0.1f32..0.1).prop_map(|(ear_dx, shoulder_dy, hip_dx)| {
        FrameBuilder::upright()
            .shift_ears(ear_dx)
            .place(Keypoint::RightShoulder, 0.38, 0.50 + shoulder_dy, 0.95)
            .place(Keypoint::LeftHip, 0.58 + hip_dx, 0.85, 0.9)
            .place(Keypoint::RightHip, 0.42 + hip_dx, 0.85, 0.9)
            .build()
    })
}

fn metrics() -> impl Strategy<Value = PostureMetrics> {
    (0u8..=100, 0u8..=100, 0u8..=100).prop_map(|(n, sh, sp)| PostureMetrics::new(n, sh, sp))
}

// =========================================================================
// Bounds
// =========================================================================
proptest! {
    #[test]
    fn scores_stay_in_range(frame in frame(), level in -5i32..20) {
        let result = evaluate(&frame, level);
        prop_assert!(result.score <= 100);
        prop_assert!(result.metrics.neck <= 100);
        prop_assert!(result.metrics.shoulders <= 100);
        prop_assert!(result.metrics.spine <= 100);
        if result.is_ignored() {
            prop_assert_eq!(result.score, 100);
            prop_assert_eq!(result.metrics, PostureMetrics::PERFECT);
        }
    }

    #[test]
    fn scored_frames_respect_floor(frame in perturbed_upright()) {
        let result = evaluate(&frame, 5);
        prop_assume!(!result.is_ignored());
        prop_assert!(result.metrics.neck >= 20);
        prop_assert!(result.metrics.shoulders >= 20);
        prop_assert!(result.metrics.spine >= 20);
    }
}

// =========================================================================
// Purity
// =========================================================================
proptest! {
    #[test]
    fn evaluate_is_pure(frame in frame(), level in 1i32..=10) {
        prop_assert_eq!(evaluate(&frame, level), evaluate(&frame, level));
    }
}

// =========================================================================
// Sensitivity monotonicity
// =========================================================================
proptest! {
    #[test]
    fn stricter_never_turns_bad_into_good(m in metrics(), low in 1i32..=10, high in 1i32..=10) {
        prop_assume!(low <= high);
        let classifier = Classifier::default();
        let (low, high) = (Sensitivity::new(low), Sensitivity::new(high));
        prop_assert!(classifier.threshold(low) <= classifier.threshold(high));

        let relaxed = classifier.classify(&m, low);
        let strict = classifier.classify(&m, high);
        prop_assert_eq!(relaxed.score, strict.score);
        if strict.is_good {
            prop_assert!(relaxed.is_good);
        }
    }
}

// =========================================================================
// Ignore idempotence
// =========================================================================
proptest! {
    #[test]
    fn ignored_frames_never_move_state(
        warmup in prop::collection::vec(perturbed_upright(), 0..10),
        repeats in 1usize..20,
    ) {
        let mut state = SmootherState::new();
        for frame in &warmup {
            evaluate_and_smooth(&mut state, frame, 5);
        }
        let before = state.clone();

        let away = FrameBuilder::upright()
            .place(Keypoint::Nose, 0.9, 0.3, 0.99)
            .build();
        for _ in 0..repeats {
            let (result, _) = evaluate_and_smooth(&mut state, &away, 5);
            prop_assert_eq!(result.ignore_reason(), Some(IgnoreReason::LookingAway));
        }
        prop_assert_eq!(state, before);
    }
}

// =========================================================================
// Smoothing convergence
// =========================================================================
proptest! {
    #[test]
    fn display_score_converges(m in metrics(), steps in 0usize..10) {
        let classifier = Classifier::default();
        let smoother = Smoother::default();
        let result = PostureResult::scored(m, classifier.classify(&m, Sensitivity::default()));
        let target = result.score as f32;

        let mut state = SmootherState::new();
        let initial_error = (state.display_score() - target).abs();
        for _ in 0..steps {
            smoother.update(&mut state, &result);
        }
        // Error shrinks by exactly 0.9 per step
        let expected = initial_error * 0.9f32.powi(steps as i32);
        prop_assert!(((state.display_score() - target).abs() - expected).abs() < 1e-2);

        for _ in 0..60 {
            smoother.update(&mut state, &result);
        }
        prop_assert!((state.display_score() - target).abs() < 0.5);
        prop_assert!(state.momentum() >= -1.0 && state.momentum() <= 1.0);
    }
}
