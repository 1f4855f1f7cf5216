//! Error taxonomy for the simulation pipeline.
//!
//! Formula and runner code fails fast with a specific error kind instead of
//! letting NaN or complex values leak into persisted data. Aggregation
//! errors always carry the offending file path so a broken tree is
//! diagnosable from the message alone.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed case parameters (non-positive mass, degenerate distance range).
    #[error("invalid case '{label}': {reason}")]
    InvalidCase { label: String, reason: String },

    /// Mathematically undefined evaluation, e.g. sampling at or inside the
    /// Schwarzschild radius.
    #[error(
        "time dilation is undefined at r = {r_m:.6e} m for rs = {rs_m:.6e} m (requires r > rs)"
    )]
    InvalidDomain { r_m: f64, rs_m: f64 },

    /// A persisted result file that cannot be summarized: unreadable,
    /// missing the dilation column, or carrying non-numeric data.
    #[error("malformed result file {}: {reason}", path.display())]
    MalformedResult { path: PathBuf, reason: String },

    /// Filesystem failure while producing or scanning output.
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failure while writing a case table.
    #[error("failed to write table {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Plot rendering failure.
    #[error("failed to render {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },
}

impl Error {
    /// Shorthand for an invalid-case error.
    pub fn invalid_case(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidCase {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a malformed-result error.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::MalformedResult {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
