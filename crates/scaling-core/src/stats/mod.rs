//! Statistical reduction of raw timing samples
//!
//! This module turns a sequence of raw timing samples into the summary
//! statistics stored on a record: defensive outlier filtering followed by
//! mean/min/max/standard-deviation reduction.
//!
//! # Examples
//!
//! ```
//! use scaling_core::stats::{filter_outliers, SampleSummary};
//!
//! let raw = vec![1_000_000.0, 1_020_000.0, 4_000_000_000.0];
//!
//! // Drop corrupted readings (>= 1 hour in microseconds)
//! let accepted = filter_outliers(&raw);
//! assert_eq!(accepted.len(), 2);
//!
//! let summary = SampleSummary::from_samples(&accepted).unwrap();
//! assert_eq!(summary.mean, 1_010_000.0);
//! ```

pub mod outliers;
pub mod summary;

pub use outliers::{filter_outliers, is_outlier, OUTLIER_CEILING_US};
pub use summary::SampleSummary;
