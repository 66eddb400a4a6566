//! Directory scan and per-file sample reduction
//!
//! [`ingest`] performs one sequential pass over a results directory,
//! recognizes well-formed result filenames, reduces each file's samples to
//! one [`SummaryRecord`](crate::record::SummaryRecord), and returns the
//! full collection with diagnostic counters.
//!
//! Error policy: the only fatal failure is a directory that cannot be
//! read. A non-matching filename is skipped silently; an unparsable line
//! drops one sample; a file with zero usable samples counts as errored and
//! the scan continues.
//!
//! # Example
//!
//! ```no_run
//! use scaling_core::ingest;
//!
//! # fn example() -> anyhow::Result<()> {
//! let results = ingest(std::path::Path::new("Resultados"))?;
//! println!(
//!     "{} processed, {} errored",
//!     results.scan().files_processed,
//!     results.scan().files_errored
//! );
//! # Ok(())
//! # }
//! ```

mod filename;

pub use filename::parse_result_filename;

use crate::error::{IngestError, SampleParseError};
use crate::record::{ConfigurationKey, ResultSet, ScanReport, SummaryRecord};
use crate::stats::{is_outlier, SampleSummary};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Parse one line of a result file as a timing sample in microseconds.
///
/// Surrounding whitespace is ignored. Blank or malformed lines are
/// [`SampleParseError`]; the caller decides to discard and tally.
pub fn parse_sample(line: &str) -> Result<f64, SampleParseError> {
    let trimmed = line.trim();
    trimmed.parse::<f64>().map_err(|_| SampleParseError {
        line: trimmed.to_string(),
    })
}

/// Scan a results directory into a [`ResultSet`].
///
/// Entries are processed in filename order, so when two files map to the
/// same configuration (overlapping re-runs) the later name wins
/// deterministically on every platform.
///
/// # Errors
///
/// Only a directory that cannot be enumerated at all is an error; every
/// per-file failure is absorbed into the scan counters.
pub fn ingest(dir: &Path) -> Result<ResultSet, IngestError> {
    info!(dir = %dir.display(), "scanning results directory");

    let entries = fs::read_dir(dir).map_err(|source| IngestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut named: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .collect();
    named.sort_by(|a, b| a.0.cmp(&b.0));

    let mut by_key: BTreeMap<ConfigurationKey, SummaryRecord> = BTreeMap::new();
    let mut scan = ScanReport::default();

    for (name, path) in named {
        let key = match parse_result_filename(&name) {
            Some(key) => key,
            None => continue,
        };

        match reduce_file(&path) {
            Some(summary) => {
                debug!(file = %name, samples = summary.count, "file reduced");
                let record = SummaryRecord {
                    key: key.clone(),
                    mean_us: summary.mean,
                    min_us: summary.min,
                    max_us: summary.max,
                    std_dev_us: summary.std_dev,
                    samples: summary.count,
                };
                if by_key.insert(key.clone(), record).is_some() {
                    warn!(file = %name, key = %key, "duplicate configuration, keeping later file");
                }
                scan.files_processed += 1;
            }
            None => {
                warn!(file = %name, "no usable samples");
                scan.files_errored += 1;
            }
        }
    }

    info!(
        processed = scan.files_processed,
        errored = scan.files_errored,
        "scan complete"
    );

    Ok(ResultSet::new(by_key.into_values().collect(), scan))
}

/// Reduce one result file to summary statistics.
///
/// `None` covers every per-file failure: the file cannot be opened, or no
/// line survives parsing and the outlier filter.
fn reduce_file(path: &Path) -> Option<SampleSummary> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!(file = %path.display(), error = %err, "cannot open result file");
            return None;
        }
    };

    let mut accepted = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => continue,
        };
        if let Ok(sample) = parse_sample(&line) {
            if !is_outlier(sample) {
                accepted.push(sample);
            }
        }
    }

    SampleSummary::from_samples(&accepted)
}
