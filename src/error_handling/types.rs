//! Error type definitions.
//!
//! This module defines the error types and row skip reasons used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the conversion pipeline.
///
/// An empty result is deliberately not represented here: it is a normal
/// outcome of an export (see `ExportOutcome::Empty`), not a failure.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input is neither valid UTF-8 nor valid Big5.
    #[error("Unable to decode {} as UTF-8 or Big5", path.display())]
    Decoding {
        /// Input file that failed to decode
        path: PathBuf,
    },

    /// Reading the input or writing an output failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The CSV structure could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Records could not be serialized to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Reasons an input row is dropped instead of becoming a record.
///
/// When more than one required field is blank the first in column order is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// `level` is absent or blank
    MissingLevel,
    /// `keyword` is absent or blank
    MissingKeyword,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SkipReason {
    /// Human-readable reason used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingLevel => "missing level",
            SkipReason::MissingKeyword => "missing keyword",
        }
    }
}
