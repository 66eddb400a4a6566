//! Error types for the scan and report stages.
//!
//! Only two things are fatal in this crate: a results directory that
//! cannot be read at all, and a report artifact that cannot be written.
//! Everything per-item (bad line, bad file, missing baseline) is recovered
//! locally and surfaced through counters or a typed skip signal instead.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal scan failures.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read results directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A line of a result file that is not a valid sample.
///
/// Callers discard the sample and tally the failure; the error never
/// propagates past the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid timing sample: {line:?}")]
pub struct SampleParseError {
    /// The offending line, trimmed
    pub line: String,
}

/// Report generation failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to format report: {0}")]
    Fmt(#[from] std::fmt::Error),
}
