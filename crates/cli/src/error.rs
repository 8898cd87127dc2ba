//! Error types for the flightdeck CLI

use flightdeck_monitor::MonitorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Input not found: {0}")]
    InputNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Monitor(#[from] MonitorError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound(_) => 2,
            Self::InvalidConfiguration(_) | Self::Monitor(MonitorError::Config(_)) => 3,
            Self::MalformedInput(_) | Self::JsonError(_) | Self::Monitor(MonitorError::Decode { .. }) => 4,
            Self::Monitor(MonitorError::Io { .. }) => 2,
            Self::IoError(_) => 1,
        }
    }

    /// Short machine-readable name used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputNotFound(_) => "input_not_found",
            Self::InvalidConfiguration(_) | Self::Monitor(MonitorError::Config(_)) => {
                "invalid_configuration"
            }
            Self::MalformedInput(_) | Self::Monitor(MonitorError::Decode { .. }) => {
                "malformed_input"
            }
            Self::JsonError(_) => "json",
            Self::IoError(_) | Self::Monitor(MonitorError::Io { .. }) => "io",
        }
    }
}
