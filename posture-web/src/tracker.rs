//! Tracker - one pipeline, one sensitivity setting, at most one live session
//!
//! Hosts drive it from their frame loop: `start_session`, then `process`
//! every frame, then `stop_session` for the summary.

use crate::classifier::Sensitivity;
use crate::config::PostureConfig;
use crate::error::{ConfigError, PostureError};
use crate::landmarks::Landmark;
use crate::pipeline::PosturePipeline;
use crate::result::PostureResult;
use crate::smoother::{DisplaySnapshot, Session, SessionSummary};

#[derive(Default)]
pub struct Tracker {
    pipeline: PosturePipeline,
    sensitivity: Sensitivity,
    session: Option<Session>,
}

impl Tracker {
    pub fn new(config: PostureConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            pipeline: PosturePipeline::new(config)?,
            sensitivity: Sensitivity::default(),
            session: None,
        })
    }

    /// Swap in a new configuration. A live session keeps its state.
    pub fn configure(&mut self, config: PostureConfig) -> Result<(), ConfigError> {
        self.pipeline = PosturePipeline::new(config)?;
        tracing::debug!(layout = ?self.pipeline.config().layout, "tracker reconfigured");
        Ok(())
    }

    pub fn config(&self) -> &PostureConfig {
        self.pipeline.config()
    }

    pub fn pipeline(&self) -> &PosturePipeline {
        &self.pipeline
    }

    pub fn set_sensitivity(&mut self, sensitivity: impl Into<Sensitivity>) {
        self.sensitivity = sensitivity.into();
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a fresh session, discarding any session still running
    pub fn start_session(&mut self) {
        if self.session.is_some() {
            tracing::warn!("session already running, restarting");
        }
        self.session = Some(Session::start());
    }

    pub fn stop_session(&mut self) -> Result<SessionSummary, PostureError> {
        let session = self
            .session
            .take()
            .ok_or_else(|| PostureError::precondition("no session is running"))?;
        Ok(session.stop(self.pipeline.config().smoother.frame_interval_secs))
    }

    /// Evaluate one frame into the live session
    pub fn process(&mut self, frame: &[Landmark]) -> Result<(PostureResult, DisplaySnapshot), PostureError> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| PostureError::precondition("start a session before processing frames"))?;
        let result = self.pipeline.evaluate(frame, self.sensitivity);
        let snapshot = session.observe(self.pipeline.smoother(), &result);
        Ok((result, snapshot))
    }

    /// Evaluate without touching any session
    pub fn evaluate(&self, frame: &[Landmark]) -> PostureResult {
        self.pipeline.evaluate(frame, self.sensitivity)
    }

    pub fn snapshot(&self) -> Option<DisplaySnapshot> {
        self.session.as_ref().map(Session::snapshot)
    }
}
