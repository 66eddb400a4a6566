//! Markdown executive-summary reporter

use crate::error::ReportError;
use crate::record::ResultSet;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Format the executive summary.
    ///
    /// `generated_at` is stamped into the header; callers pass
    /// `Utc::now()` outside of tests.
    pub fn format(
        results: &ResultSet,
        generated_at: DateTime<Utc>,
    ) -> Result<String, ReportError> {
        let mut output = String::new();

        writeln!(output, "# Benchmark Results Summary")?;
        writeln!(output)?;
        writeln!(output, "Generated: {}", generated_at.to_rfc3339())?;
        writeln!(output)?;
        writeln!(output, "---")?;
        writeln!(output)?;

        writeln!(output, "## Best Configurations")?;
        writeln!(output)?;
        for size in results.sizes() {
            writeln!(output, "### Matrix {}×{}", size, size)?;
            writeln!(output)?;
            for program in results.programs() {
                if let Some(best) = results.fastest(&program, size) {
                    writeln!(output, "**{}:**", program)?;
                    writeln!(output, "- Best configuration: {} threads", best.key.threads)?;
                    writeln!(output, "- Time: {:.3} seconds", best.mean_seconds())?;
                    writeln!(output)?;
                }
            }
        }

        writeln!(output, "## Fastest Program by Size")?;
        writeln!(output)?;
        for size in results.sizes() {
            if let Some(best) = results.fastest_for_size(size) {
                writeln!(
                    output,
                    "- **N={}:** {} with {} threads ({:.3}s)",
                    size,
                    best.key.program,
                    best.key.threads,
                    best.mean_seconds()
                )?;
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConfigurationKey, ScanReport, SummaryRecord};
    use chrono::TimeZone;

    fn record(program: &str, size: u32, threads: u32, mean_us: f64) -> SummaryRecord {
        SummaryRecord {
            key: ConfigurationKey {
                program: program.to_string(),
                size,
                threads,
            },
            mean_us,
            min_us: mean_us,
            max_us: mean_us,
            std_dev_us: 0.0,
            samples: 5,
        }
    }

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn header_carries_the_timestamp() {
        let results = ResultSet::new(
            vec![record("seq", 800, 1, 1_000_000.0)],
            ScanReport::default(),
        );

        let output = MarkdownReporter::format(&results, fixed_timestamp()).unwrap();

        assert!(output.starts_with("# Benchmark Results Summary"));
        assert!(output.contains("Generated: 2024-03-15T12:00:00+00:00"));
    }

    #[test]
    fn best_configuration_is_lowest_mean_per_program_and_size() {
        let results = ResultSet::new(
            vec![
                record("par", 800, 1, 1_000_000.0),
                record("par", 800, 4, 305_000.0),
                record("par", 800, 8, 410_000.0),
            ],
            ScanReport::default(),
        );

        let output = MarkdownReporter::format(&results, fixed_timestamp()).unwrap();

        assert!(output.contains("### Matrix 800×800"));
        assert!(output.contains("- Best configuration: 4 threads"));
        assert!(output.contains("- Time: 0.305 seconds"));
    }

    #[test]
    fn fastest_program_by_size_compares_across_programs() {
        let results = ResultSet::new(
            vec![
                record("seq", 800, 1, 1_000_000.0),
                record("par", 800, 4, 305_000.0),
            ],
            ScanReport::default(),
        );

        let output = MarkdownReporter::format(&results, fixed_timestamp()).unwrap();

        assert!(output.contains("- **N=800:** par with 4 threads (0.305s)"));
    }

    #[test]
    fn empty_set_has_sections_but_no_entries() {
        let results = ResultSet::new(vec![], ScanReport::default());
        let output = MarkdownReporter::format(&results, fixed_timestamp()).unwrap();

        assert!(output.contains("## Best Configurations"));
        assert!(!output.contains("### Matrix"));
    }
}
