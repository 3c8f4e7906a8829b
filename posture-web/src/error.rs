//! Error types
//!
//! Unusable landmark data is never an error (it becomes an ignore verdict).
//! Errors here are caller bugs or bad configuration.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors returned by the posture core
#[derive(Error, Debug)]
pub enum PostureError {
    /// The caller broke an API contract (no active session, malformed buffer)
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PostureError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        PostureError::PreconditionViolation(msg.into())
    }

    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, PostureError::PreconditionViolation(_))
    }
}

/// Errors raised while loading or validating a `PostureConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

impl From<PostureError> for JsValue {
    fn from(err: PostureError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
