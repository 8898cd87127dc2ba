//! Monitor error types.

use flightdeck_status::DecodeError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`crate::StatusMonitor`] and its configuration.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// A malformed frame while the monitor is configured to abort on one.
    #[error("Line {line}: {source}")]
    Decode {
        line: u64,
        #[source]
        source: DecodeError,
    },

    #[error("Invalid monitor configuration: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MonitorError {
    /// Line number the error refers to, when there is one.
    #[must_use]
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::Decode { line, .. } => Some(*line),
            Self::Config(_) | Self::Io { .. } => None,
        }
    }
}

impl From<serde_yaml::Error> for MonitorError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}
