//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("failed to parse diagnostics document: {0}")]
    ParseInput(serde_json::Error),
    #[error("invalid document path '{path}': {message}")]
    InvalidPath { path: String, message: String },
    #[error("failed to serialise code actions: {0}")]
    SerialiseOutput(serde_json::Error),
    #[error("failed to write code actions: {0}")]
    WriteOutput(io::Error),
}

impl AppError {
    pub(crate) fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Raised when a `--at` value is not `LINE:CHARACTER`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected LINE:CHARACTER, got '{0}'")]
pub(crate) struct PositionParseError(String);

impl PositionParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self(input.to_owned())
    }
}
