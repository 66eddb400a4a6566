//! Report generation over an aggregated result set
//!
//! Each reporter consumes the full [`ResultSet`] and the per-query output
//! of the deriver; a "not applicable" derivation means "skip that
//! (program, size) combination", never a fatal condition.
//!
//! # Output Formats
//!
//! - **Console**: human-readable run summary
//! - **JSON / CSV**: machine-readable record dumps
//! - **LaTeX**: per-program scaling tables for the report document
//! - **Markdown**: executive summary
//! - **SVG**: time, speedup and efficiency charts
//!
//! # Example
//!
//! ```no_run
//! use scaling_core::{ingest, Config, ReportWriter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//! let results = ingest(&config.analysis.results_dir)?;
//!
//! let writer = ReportWriter::new(&config.analysis.output_dir);
//! let written = writer.write_all(&results, &config)?;
//! println!("{} artifacts", written.len());
//! # Ok(())
//! # }
//! ```

mod console;
mod csv;
mod json;
mod latex;
mod markdown;
mod plot;

pub use console::ConsoleReporter;
pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use latex::LatexReporter;
pub use markdown::MarkdownReporter;
pub use plot::SvgPlotter;

use crate::config::Config;
use crate::error::ReportError;
use crate::record::ResultSet;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Writes every report artifact into one output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write all artifacts and return the paths actually written.
    ///
    /// Charts are emitted for each configured size present in the data;
    /// combinations the deriver reports as not applicable are simply
    /// absent from the generated files.
    pub fn write_all(
        &self,
        results: &ResultSet,
        config: &Config,
    ) -> Result<Vec<PathBuf>, ReportError> {
        fs::create_dir_all(&self.output_dir)?;
        let mut written = Vec::new();

        self.write(&mut written, "results_summary.csv", CsvReporter::format(results)?)?;
        self.write(&mut written, "results.json", JsonReporter::format(results, true)?)?;
        self.write(&mut written, "results_tables.tex", LatexReporter::format(results)?)?;
        self.write(
            &mut written,
            "results_summary.md",
            MarkdownReporter::format(results, Utc::now())?,
        )?;

        let plotter = SvgPlotter::new();
        let observed = results.sizes();
        for &size in &config.plots.sizes {
            if !observed.contains(&size) {
                continue;
            }
            if let Some(svg) = plotter.time_chart(results, size) {
                self.write(&mut written, &format!("time_{}.svg", size), svg)?;
            }
            if let Some(svg) = plotter.speedup_chart(results, size) {
                self.write(&mut written, &format!("speedup_{}.svg", size), svg)?;
            }
        }
        if let Some(svg) = plotter.efficiency_chart(results, &config.plots.sizes) {
            self.write(&mut written, "efficiency.svg", svg)?;
        }

        Ok(written)
    }

    fn write(
        &self,
        written: &mut Vec<PathBuf>,
        name: &str,
        content: String,
    ) -> Result<(), ReportError> {
        let path = self.output_dir.join(name);
        fs::write(&path, content)?;
        info!(path = %path.display(), "report written");
        written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConfigurationKey, ScanReport, SummaryRecord};
    use tempfile::tempdir;

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

    fn sample_results() -> ResultSet {
        ResultSet::new(
            vec![
                record("par", 800, 1, 1_000_000.0),
                record("par", 800, 4, 305_000.0),
            ],
            ScanReport {
                files_processed: 2,
                files_errored: 0,
            },
        )
    }

    #[test]
    fn write_all_emits_every_artifact() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let written = writer
            .write_all(&sample_results(), &Config::default())
            .unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert!(names.contains(&"results_summary.csv".to_string()));
        assert!(names.contains(&"results.json".to_string()));
        assert!(names.contains(&"results_tables.tex".to_string()));
        assert!(names.contains(&"results_summary.md".to_string()));
        assert!(names.contains(&"time_800.svg".to_string()));
        assert!(names.contains(&"speedup_800.svg".to_string()));
        assert!(names.contains(&"efficiency.svg".to_string()));

        for path in &written {
            assert!(path.exists());
        }
    }

    #[test]
    fn unconfigured_sizes_get_no_charts() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path());

        let mut config = Config::default();
        config.plots.sizes = vec![400];

        let written = writer.write_all(&sample_results(), &config).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert!(!names.iter().any(|n| n.ends_with(".svg")));
    }

    #[test]
    fn output_directory_is_created() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("reports/run-1");
        let writer = ReportWriter::new(&nested);

        writer
            .write_all(&sample_results(), &Config::default())
            .unwrap();

        assert!(nested.is_dir());
    }
}
