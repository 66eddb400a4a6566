//! Defensive outlier filtering for raw timing samples.
//!
//! Timing files occasionally contain corrupted readings (interrupted runs,
//! garbage writes). The filter is a fixed ceiling of one hour in
//! microseconds, not a statistical outlier test: anything at or above the
//! ceiling is discarded before reduction.

/// Rejection ceiling in microseconds (one hour).
pub const OUTLIER_CEILING_US: f64 = 3_600_000_000.0;

/// Whether a sample must be discarded as corrupted.
///
/// A sample is accepted only when it is strictly below
/// [`OUTLIER_CEILING_US`]. NaN never satisfies that comparison, so
/// non-finite garbage is rejected along with over-ceiling values.
///
/// # Examples
///
/// ```
/// use scaling_core::stats::is_outlier;
///
/// assert!(!is_outlier(1_000_000.0));
/// assert!(is_outlier(3_600_000_000.0));
/// assert!(is_outlier(f64::NAN));
/// ```
pub fn is_outlier(sample: f64) -> bool {
    !(sample < OUTLIER_CEILING_US)
}

/// Return the samples that survive the ceiling filter, in input order.
pub fn filter_outliers(samples: &[f64]) -> Vec<f64> {
    samples
        .iter()
        .copied()
        .filter(|&sample| !is_outlier(sample))
        .collect()
}
