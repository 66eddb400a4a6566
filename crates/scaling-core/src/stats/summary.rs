//! Summary statistics over an accepted sample sequence.

use serde::{Deserialize, Serialize};

/// Mean, extrema and spread of a non-empty sample sequence.
///
/// The standard deviation is the population form (divisor N): the samples
/// are the whole set of repetitions for the configuration, not a sample
/// drawn from a larger run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    pub count: usize,
}

impl SampleSummary {
    /// Reduce samples to summary statistics.
    ///
    /// # Returns
    ///
    /// * `Some(summary)` - For at least one sample
    /// * `None` - If `samples` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use scaling_core::stats::SampleSummary;
    ///
    /// let summary = SampleSummary::from_samples(&[2.0, 4.0, 6.0]).unwrap();
    /// assert_eq!(summary.mean, 4.0);
    /// assert_eq!(summary.min, 2.0);
    /// assert_eq!(summary.max, 6.0);
    /// assert_eq!(summary.count, 3);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let sum: f64 = samples.iter().sum();
        let mean = sum / count as f64;

        // Population variance: divisor N
        let squared_diffs: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
        let std_dev = (squared_diffs / count as f64).sqrt();

        Some(SampleSummary {
            mean,
            min,
            max,
            std_dev,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_yields_none() {
        assert!(SampleSummary::from_samples(&[]).is_none());
    }

    #[test]
    fn single_sample() {
        let summary = SampleSummary::from_samples(&[42.0]).unwrap();

        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.max, 42.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.count, 1);
    }

    #[test]
    fn known_values() {
        // mean 5.0; population variance = (9+1+1+1+0+0+4+16)/8 = 4.0
        let samples = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = SampleSummary::from_samples(&samples).unwrap();

        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.std_dev, 2.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.count, 8);
    }

    #[test]
    fn unsorted_input() {
        let samples = vec![10.0, 1.0, 5.0, 3.0, 8.0];
        let summary = SampleSummary::from_samples(&samples).unwrap();

        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 10.0);
        assert_eq!(summary.mean, 5.4);
    }

    #[test]
    fn identical_samples_have_zero_spread() {
        let summary = SampleSummary::from_samples(&[7.0, 7.0, 7.0, 7.0]).unwrap();

        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.min, summary.max);
    }

    #[test]
    fn mean_bounded_by_extrema() {
        let samples = vec![1_000_000.0, 1_020_000.0, 980_000.0];
        let summary = SampleSummary::from_samples(&samples).unwrap();

        assert!(summary.min <= summary.mean);
        assert!(summary.mean <= summary.max);
        assert_eq!(summary.mean, 1_000_000.0);
    }
}
