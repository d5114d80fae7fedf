//! Error taxonomy for the analysis pipeline.
//!
//! Parameter validation distinguishes between values that are not usable
//! numbers (`InvalidArgument`) and numbers outside their domain
//! (`OutOfRange`). Everything that makes a metric mathematically
//! undefined (too few beats, zero-variance voltage) is reported as
//! `UndefinedMetric` instead of letting NaN propagate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrmError {
    /// A parameter was not a usable number (NaN).
    #[error("invalid argument `{name}`: expected a numeric value")]
    InvalidArgument { name: &'static str },

    /// A numeric parameter violated its domain constraint.
    #[error("argument `{name}` out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },

    /// The referenced recording does not exist.
    #[error("recording source not found: {0}")]
    SourceNotFound(PathBuf),

    /// The requested metric is undefined for this input.
    #[error("undefined metric: {0}")]
    UndefinedMetric(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
