//! Speedup and efficiency derivation against the single-thread baseline
//!
//! For one (program, size) query, every observed thread count is joined
//! against that pair's 1-thread record. The dependency on the baseline is
//! strict and all-or-nothing: without a 1-thread record the whole query is
//! not applicable, even when other thread counts have data. No cross-size
//! or extrapolated baseline is ever substituted, and thread counts with
//! missing data simply do not appear in the result.

use crate::record::{DerivedRecord, ResultSet};
use thiserror::Error;

/// Typed skip signal for a derivation query.
///
/// Not a failure: report generators treat either variant as "omit this
/// (program, size) combination". The variants exist so logs can state why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotApplicable {
    /// No record matches the requested program and size.
    #[error("no records match the requested program and size")]
    NoMatchingRecords,

    /// Matching records exist, but none was measured with one thread.
    #[error("no single-thread baseline for the requested program and size")]
    MissingBaseline,
}

/// Derive speedup and efficiency for every thread count of one
/// (program, size), ascending by thread count.
///
/// The baseline row itself is included, with speedup exactly 1.0 and
/// efficiency exactly 100.0.
///
/// # Examples
///
/// ```
/// use scaling_core::{derive_speedup, NotApplicable, ResultSet, ScanReport};
///
/// let results = ResultSet::new(vec![], ScanReport::default());
/// assert_eq!(
///     derive_speedup(&results, "seq", 800),
///     Err(NotApplicable::NoMatchingRecords)
/// );
/// ```
pub fn derive_speedup(
    results: &ResultSet,
    program: &str,
    size: u32,
) -> Result<Vec<DerivedRecord>, NotApplicable> {
    let mut matching = results.for_configuration(program, size);
    if matching.is_empty() {
        return Err(NotApplicable::NoMatchingRecords);
    }

    matching.sort_by_key(|record| record.key.threads);

    let baseline_mean = matching
        .iter()
        .find(|record| record.key.threads == 1)
        .map(|record| record.mean_us)
        .ok_or(NotApplicable::MissingBaseline)?;

    Ok(matching
        .into_iter()
        .map(|record| {
            let speedup = baseline_mean / record.mean_us;
            let efficiency = speedup / record.key.threads as f64 * 100.0;
            DerivedRecord {
                record: record.clone(),
                speedup,
                efficiency,
            }
        })
        .collect())
}
