//! CSV reporter for the aggregated result set
//!
//! One row per summary record, flattened for spreadsheet consumption.

use crate::error::ReportError;
use crate::record::ResultSet;
use serde::Serialize;

/// One flattened CSV row.
#[derive(Serialize)]
struct Row<'a> {
    program: &'a str,
    size: u32,
    threads: u32,
    mean_us: f64,
    min_us: f64,
    max_us: f64,
    std_dev_us: f64,
    samples: usize,
}

/// CSV format reporter
pub struct CsvReporter;

impl CsvReporter {
    /// Format the result set as CSV with a header row.
    pub fn format(results: &ResultSet) -> Result<String, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for record in results.records() {
            writer.serialize(Row {
                program: &record.key.program,
                size: record.key.size,
                threads: record.key.threads,
                mean_us: record.mean_us,
                min_us: record.min_us,
                max_us: record.max_us,
                std_dev_us: record.std_dev_us,
                samples: record.samples,
            })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
