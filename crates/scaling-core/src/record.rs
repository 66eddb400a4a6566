//! Core record types for aggregated benchmark results
//!
//! A [`SummaryRecord`] is the unit of aggregation: one per experimental
//! configuration actually observed on disk. Records are held in a
//! [`ResultSet`], a plain ordered collection with filter/sort helpers —
//! queries over it are explicit functions, not a dataframe abstraction.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identity of one experimental configuration.
///
/// The triple is encoded in result filenames
/// (`<program>-<size>-Hilos-<threads>.dat`) and uniquely identifies a
/// configuration. Ordering is lexicographic on (program, size, threads) so
/// keyed collections iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigurationKey {
    /// Name of the benchmarked program
    pub program: String,
    /// Matrix size (N for an N×N multiplication)
    pub size: u32,
    /// Thread or process count, always >= 1
    pub threads: u32,
}

impl fmt::Display for ConfigurationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} N={} threads={}", self.program, self.size, self.threads)
    }
}

/// Aggregated timing statistics for one configuration.
///
/// All four statistics derive from the filtered sample set only; a file
/// whose samples are all rejected produces no record at all. Invariant:
/// `min_us <= mean_us <= max_us`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Configuration this record summarizes
    pub key: ConfigurationKey,
    /// Mean execution time in microseconds
    pub mean_us: f64,
    /// Minimum execution time in microseconds
    pub min_us: f64,
    /// Maximum execution time in microseconds
    pub max_us: f64,
    /// Population standard deviation in microseconds
    pub std_dev_us: f64,
    /// Number of accepted samples (experiment repetitions), >= 1
    pub samples: usize,
}

impl SummaryRecord {
    /// Mean execution time in seconds, for human-facing reports.
    pub fn mean_seconds(&self) -> f64 {
        self.mean_us / 1_000_000.0
    }
}

/// A [`SummaryRecord`] joined against its program's single-thread baseline.
///
/// Produced transiently by [`derive_speedup`](crate::derive_speedup) for one
/// (program, size) query; not persisted as a standalone entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    /// The underlying summary record
    pub record: SummaryRecord,
    /// Baseline mean time divided by this configuration's mean time
    pub speedup: f64,
    /// Speedup divided by thread count, as a percentage (100 = linear)
    pub efficiency: f64,
}

/// Diagnostic counters from one directory scan.
///
/// Not part of the aggregated data; reported to the user so silently
/// skipped files remain visible in aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Files reduced to a summary record
    pub files_processed: usize,
    /// Matching files that yielded no usable sample
    pub files_errored: usize,
}

/// The immutable output of one directory scan: summary records sorted by
/// key, plus the scan counters.
///
/// # Example
///
/// ```no_run
/// use scaling_core::ingest;
///
/// # fn example() -> anyhow::Result<()> {
/// let results = ingest(std::path::Path::new("Resultados"))?;
/// for program in results.programs() {
///     println!("{}: {} configurations", program, results.for_program(&program).len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    records: Vec<SummaryRecord>,
    scan: ScanReport,
}

impl ResultSet {
    /// Build a result set from unsorted records; sorts by key.
    pub fn new(mut records: Vec<SummaryRecord>, scan: ScanReport) -> Self {
        records.sort_by(|a, b| a.key.cmp(&b.key));
        Self { records, scan }
    }

    /// All records, sorted by (program, size, threads).
    pub fn records(&self) -> &[SummaryRecord] {
        &self.records
    }

    /// Diagnostic counters from the scan that produced this set.
    pub fn scan(&self) -> ScanReport {
        self.scan
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct program names, sorted.
    pub fn programs(&self) -> Vec<String> {
        let mut programs: Vec<String> =
            self.records.iter().map(|r| r.key.program.clone()).collect();
        programs.sort();
        programs.dedup();
        programs
    }

    /// Distinct matrix sizes, ascending.
    pub fn sizes(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self.records.iter().map(|r| r.key.size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Distinct thread counts, ascending.
    pub fn thread_counts(&self) -> Vec<u32> {
        let mut threads: Vec<u32> = self.records.iter().map(|r| r.key.threads).collect();
        threads.sort_unstable();
        threads.dedup();
        threads
    }

    /// Records for one program across all sizes, in key order.
    pub fn for_program(&self, program: &str) -> Vec<&SummaryRecord> {
        self.records
            .iter()
            .filter(|r| r.key.program == program)
            .collect()
    }

    /// Records for one (program, size), ascending by thread count.
    pub fn for_configuration(&self, program: &str, size: u32) -> Vec<&SummaryRecord> {
        self.records
            .iter()
            .filter(|r| r.key.program == program && r.key.size == size)
            .collect()
    }

    /// The record with the lowest mean time for one (program, size).
    pub fn fastest(&self, program: &str, size: u32) -> Option<&SummaryRecord> {
        Self::min_by_mean(self.for_configuration(program, size))
    }

    /// The record with the lowest mean time for one program, any size.
    pub fn fastest_for_program(&self, program: &str) -> Option<&SummaryRecord> {
        Self::min_by_mean(self.for_program(program))
    }

    /// The record with the lowest mean time for one size, any program.
    pub fn fastest_for_size(&self, size: u32) -> Option<&SummaryRecord> {
        Self::min_by_mean(
            self.records
                .iter()
                .filter(|r| r.key.size == size)
                .collect(),
        )
    }

    fn min_by_mean(records: Vec<&SummaryRecord>) -> Option<&SummaryRecord> {
        records.into_iter().min_by(|a, b| {
            a.mean_us
                .partial_cmp(&b.mean_us)
                .unwrap_or(Ordering::Equal)
        })
    }
}
