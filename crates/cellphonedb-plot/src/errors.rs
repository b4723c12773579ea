//! Error types for the plotting gateway

use cellphonedb_core::errors::{ExError, ExErrorKind};
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a plot request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// No usable R installation
    #[error("R runtime not available: {reason}")]
    RuntimeMissing { reason: String },

    /// R ran the plot and exited unsuccessfully
    #[error("R exited with status {}: {stderr}", .status.map_or_else(|| "unknown".to_string(), |s| s.to_string()))]
    RuntimeException { status: Option<i32>, stderr: String },

    /// The sourced script does not define the expected function
    #[error("R function '{function}' is not defined by {script}")]
    MissingPlotFunction { function: String, script: String },

    /// An input or temporary file could not be read or written
    #[error("I/O failure on {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// An input file is not usable for the plot
    #[error("Invalid plot input: {reason}")]
    InvalidInput { reason: String },
}

impl PlotError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        PlotError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<PlotError> for ExError {
    fn from(err: PlotError) -> Self {
        match err {
            PlotError::RuntimeMissing { reason } => {
                ExError::new(ExErrorKind::RuntimeMissing).with_message(reason)
            }
            PlotError::RuntimeException { .. } => {
                ExError::new(ExErrorKind::RuntimeExecution).with_message(err.to_string())
            }
            PlotError::MissingPlotFunction { .. } => {
                ExError::new(ExErrorKind::MissingPlotFunction).with_message(err.to_string())
            }
            PlotError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(err.to_string()),
            PlotError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}
