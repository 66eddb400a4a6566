//! Console reporter for an analysis run
//!
//! Human-readable summary of the scan: counters, observed dimensions, and
//! per-program headline statistics.

use crate::error::ReportError;
use crate::record::ResultSet;
use std::fmt::Write;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format the result set for console output.
    pub fn format(results: &ResultSet) -> Result<String, ReportError> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                  SCALING ANALYSIS RESULTS                    ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        let scan = results.scan();
        writeln!(output, "Files processed: {}", scan.files_processed)?;
        writeln!(output, "Files errored:   {}", scan.files_errored)?;
        writeln!(output, "Configurations:  {}", results.len())?;
        writeln!(output)?;

        writeln!(output, "Programs:      {}", results.programs().join(", "))?;
        writeln!(output, "Sizes:         {}", join_numbers(&results.sizes()))?;
        writeln!(output, "Thread counts: {}", join_numbers(&results.thread_counts()))?;

        for program in results.programs() {
            Self::format_program(&mut output, results, &program)?;
        }

        writeln!(output)?;
        Ok(output)
    }

    fn format_program(
        output: &mut String,
        results: &ResultSet,
        program: &str,
    ) -> Result<(), ReportError> {
        let records = results.for_program(program);

        // min of observed minima, max of observed maxima
        let min_us = records.iter().map(|r| r.min_us).fold(f64::INFINITY, f64::min);
        let max_us = records
            .iter()
            .map(|r| r.max_us)
            .fold(f64::NEG_INFINITY, f64::max);

        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        writeln!(output, "{}", program)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        writeln!(output, "  Min time: {:.3}s", min_us / 1_000_000.0)?;
        writeln!(output, "  Max time: {:.3}s", max_us / 1_000_000.0)?;

        if let Some(best) = results.fastest_for_program(program) {
            writeln!(
                output,
                "  Fastest:  N={}, {} threads, {:.3}s",
                best.key.size,
                best.key.threads,
                best.mean_seconds()
            )?;
        }

        Ok(())
    }
}

fn join_numbers(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConfigurationKey, ScanReport, SummaryRecord};

    fn sample_results() -> ResultSet {
        let record = |program: &str, size: u32, threads: u32, mean_us: f64| SummaryRecord {
            key: ConfigurationKey {
                program: program.to_string(),
                size,
                threads,
            },
            mean_us,
            min_us: mean_us * 0.9,
            max_us: mean_us * 1.1,
            std_dev_us: mean_us * 0.05,
            samples: 10,
        };

        ResultSet::new(
            vec![
                record("mmClasica", 800, 1, 1_000_000.0),
                record("mmClasica", 800, 4, 300_000.0),
                record("mmFork", 800, 1, 1_200_000.0),
            ],
            ScanReport {
                files_processed: 3,
                files_errored: 1,
            },
        )
    }

    #[test]
    fn output_carries_both_counters() {
        let output = ConsoleReporter::format(&sample_results()).unwrap();

        assert!(output.contains("Files processed: 3"));
        assert!(output.contains("Files errored:   1"));
        assert!(output.contains("Configurations:  3"));
    }

    #[test]
    fn output_lists_observed_dimensions() {
        let output = ConsoleReporter::format(&sample_results()).unwrap();

        assert!(output.contains("Programs:      mmClasica, mmFork"));
        assert!(output.contains("Sizes:         800"));
        assert!(output.contains("Thread counts: 1, 4"));
    }

    #[test]
    fn per_program_section_names_the_fastest_configuration() {
        let output = ConsoleReporter::format(&sample_results()).unwrap();

        assert!(output.contains("mmClasica"));
        assert!(output.contains("Fastest:  N=800, 4 threads, 0.300s"));
    }

    #[test]
    fn empty_set_still_formats() {
        let results = ResultSet::new(vec![], ScanReport::default());
        let output = ConsoleReporter::format(&results).unwrap();

        assert!(output.contains("Configurations:  0"));
    }
}
