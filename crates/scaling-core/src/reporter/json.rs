//! JSON reporter for the aggregated result set

use crate::error::ReportError;
use crate::record::ResultSet;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format the result set as JSON.
    ///
    /// # Arguments
    ///
    /// * `results` - The aggregated records to format
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(results: &ResultSet, pretty: bool) -> Result<String, ReportError> {
        let output = if pretty {
            serde_json::to_string_pretty(results)?
        } else {
            serde_json::to_string(results)?
        };
        Ok(output)
    }
}
