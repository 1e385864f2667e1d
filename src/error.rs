//! Error type for the fallible edges of the crate.
//!
//! Training, scoring and correction never fail. Errors only come from the
//! configuration surface and from reading corpus text.

use std::io;

use thiserror::Error;

/// Errors produced while configuring a model or loading a corpus.
#[derive(Error, Debug)]
pub enum FuzzyError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading corpus text failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A JSON configuration document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FuzzyError {
    /// Create an [`FuzzyError::InvalidConfig`] error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FuzzyError::InvalidConfig(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FuzzyError>;
