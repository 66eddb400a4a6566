//! Aggregation and reporting for parallel-benchmark timing experiments
//!
//! This crate ingests the raw `.dat` timing files produced by parallel
//! matrix-multiplication experiments, reduces them into per-configuration
//! statistics, derives speedup and efficiency against each program's
//! single-thread baseline, and renders the result as plots, tables and
//! summaries.
//!
//! # Features
//!
//! - **Filename-as-schema ingestion**: configuration identity is parsed
//!   from `<program>-<size>-Hilos-<threads>.dat` names; unrelated files
//!   are ignored
//! - **Defensive filtering**: corrupted readings (>= 1 hour in
//!   microseconds) are dropped before reduction
//! - **Baseline derivation**: speedup and efficiency per thread count,
//!   with a typed "not applicable" signal when the 1-thread baseline is
//!   missing
//! - **Multiple output formats**: console, CSV, JSON, LaTeX tables,
//!   Markdown summary, SVG charts
//!
//! # Example
//!
//! ```no_run
//! use scaling_core::{derive_speedup, ingest, Config, ReportWriter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//! let results = ingest(&config.analysis.results_dir)?;
//!
//! for program in results.programs() {
//!     for size in results.sizes() {
//!         if let Ok(derived) = derive_speedup(&results, &program, size) {
//!             for entry in derived {
//!                 println!(
//!                     "{}: speedup {:.2} at {} threads",
//!                     program, entry.speedup, entry.record.key.threads
//!                 );
//!             }
//!         }
//!     }
//! }
//!
//! ReportWriter::new(&config.analysis.output_dir).write_all(&results, &config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Input format
//!
//! One floating-point duration in microseconds per line, no header. The
//! filename is the sole carrier of the (program, size, threads) identity.

pub mod config;
pub mod derive;
pub mod error;
pub mod ingest;
pub mod record;
pub mod reporter;
pub mod stats;

// Re-export main types for convenience
pub use config::Config;
pub use derive::{derive_speedup, NotApplicable};
pub use error::{IngestError, ReportError, SampleParseError};
pub use ingest::ingest;
pub use record::{ConfigurationKey, DerivedRecord, ResultSet, ScanReport, SummaryRecord};
pub use reporter::{ConsoleReporter, ReportWriter};
