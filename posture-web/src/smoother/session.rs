//! Tracking session - smoother state plus frame statistics
//!
//! A session is the span between start and stop of tracking. Stopping
//! consumes it and yields a summary for whatever persistence layer the
//! host uses.

use serde::{Deserialize, Serialize};

use crate::result::PostureResult;

use super::snapshot::DisplaySnapshot;
use super::state::SmootherState;
use super::update::Smoother;

/// Frame counters and running sums for one session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub good_frames: u64,
    pub bad_frames: u64,
    pub ignored_frames: u64,
    score_sum: u64,
    neck_sum: u64,
    shoulders_sum: u64,
    spine_sum: u64,
}

impl SessionStats {
    pub fn record(&mut self, result: &PostureResult) {
        if result.is_ignored() {
            self.ignored_frames += 1;
            return;
        }

        if result.is_good {
            self.good_frames += 1;
        } else {
            self.bad_frames += 1;
        }
        self.score_sum += result.score as u64;
        self.neck_sum += result.metrics.neck as u64;
        self.shoulders_sum += result.metrics.shoulders as u64;
        self.spine_sum += result.metrics.spine as u64;
    }

    /// Frames that produced a posture opinion
    pub fn evaluated_frames(&self) -> u64 {
        self.good_frames + self.bad_frames
    }

    /// Mean instantaneous score over evaluated frames
    pub fn average_score(&self) -> Option<f32> {
        let n = self.evaluated_frames();
        (n > 0).then(|| self.score_sum as f32 / n as f32)
    }

    pub fn breakdown(&self) -> Option<MetricsBreakdown> {
        let n = self.evaluated_frames();
        (n > 0).then(|| MetricsBreakdown {
            neck: self.neck_sum as f32 / n as f32,
            shoulders: self.shoulders_sum as f32 / n as f32,
            spine: self.spine_sum as f32 / n as f32,
        })
    }
}

/// Mean sub-scores over a session
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsBreakdown {
    pub neck: f32,
    pub shoulders: f32,
    pub spine: f32,
}

/// End-of-session hand-off
///
/// All durations are frame counts × the nominal frame interval, so they
/// drift from wall-clock time when the real cadence differs from 30 Hz.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub evaluated_frames: u64,
    pub ignored_frames: u64,
    pub duration_secs: f32,
    pub good_secs: f32,
    pub bad_secs: f32,
    pub average_score: Option<u8>,
    pub breakdown: Option<MetricsBreakdown>,
    pub final_snapshot: DisplaySnapshot,
}

impl SessionSummary {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Live tracking session
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: SmootherState,
    stats: SessionStats,
}

impl Session {
    /// Begin a session at the smoother defaults
    pub fn start() -> Self {
        tracing::info!("posture session started");
        Self::default()
    }

    /// Record `result` and fold it into the smoother state
    pub fn observe(&mut self, smoother: &Smoother, result: &PostureResult) -> DisplaySnapshot {
        self.stats.record(result);
        smoother.update(&mut self.state, result)
    }

    pub fn state(&self) -> &SmootherState {
        &self.state
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::from(&self.state)
    }

    /// End the session. `frame_interval_secs` converts frame counts to time.
    pub fn stop(self, frame_interval_secs: f32) -> SessionSummary {
        let stats = &self.stats;
        let seconds = |frames: u64| frames as f32 * frame_interval_secs;

        let summary = SessionSummary {
            evaluated_frames: stats.evaluated_frames(),
            ignored_frames: stats.ignored_frames,
            duration_secs: seconds(stats.evaluated_frames() + stats.ignored_frames),
            good_secs: seconds(stats.good_frames),
            bad_secs: seconds(stats.bad_frames),
            average_score: stats.average_score().map(|s| s.round().clamp(0.0, 100.0) as u8),
            breakdown: stats.breakdown(),
            final_snapshot: self.snapshot(),
        };

        tracing::info!(
            evaluated = summary.evaluated_frames,
            ignored = summary.ignored_frames,
            average_score = ?summary.average_score,
            "posture session stopped"
        );
        summary
    }
}
