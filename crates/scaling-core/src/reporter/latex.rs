//! LaTeX table reporter
//!
//! One `table`/`tabular` environment per program, with a block of rows per
//! matrix size. Sizes without a single-thread baseline are omitted — the
//! derivation's "not applicable" signal skips the combination, it never
//! aborts the report.

use crate::derive::derive_speedup;
use crate::error::ReportError;
use crate::record::ResultSet;
use std::fmt::Write;

/// LaTeX format reporter
pub struct LatexReporter;

impl LatexReporter {
    /// Format per-program scaling tables as a LaTeX fragment.
    ///
    /// Programs with no derivable size produce no table at all.
    pub fn format(results: &ResultSet) -> Result<String, ReportError> {
        let mut output = String::new();

        for program in results.programs() {
            let rows = Self::format_rows(results, &program)?;
            if rows.is_empty() {
                continue;
            }

            writeln!(output)?;
            writeln!(output, "% Table for {}", program)?;
            writeln!(output, "\\begin{{table}}[H]")?;
            writeln!(output, "\\centering")?;
            writeln!(output, "\\caption{{Scaling results for {}}}", escape(&program))?;
            writeln!(output, "\\label{{tab:{}}}", program.to_lowercase())?;
            writeln!(output, "\\begin{{tabular}}{{|c|c|r|r|r|}}")?;
            writeln!(output, "\\hline")?;
            writeln!(
                output,
                "\\textbf{{Size}} & \\textbf{{Threads}} & \\textbf{{Time (s)}} & \\textbf{{Speedup}} & \\textbf{{Efficiency (\\%)}} \\\\"
            )?;
            output.push_str(&rows);
            writeln!(output, "\\hline")?;
            writeln!(output, "\\end{{tabular}}")?;
            writeln!(output, "\\end{{table}}")?;
        }

        Ok(output)
    }

    fn format_rows(results: &ResultSet, program: &str) -> Result<String, ReportError> {
        let mut rows = String::new();

        for size in results.sizes() {
            let derived = match derive_speedup(results, program, size) {
                Ok(derived) => derived,
                Err(_) => continue,
            };

            writeln!(rows, "\\hline")?;
            for entry in &derived {
                writeln!(
                    rows,
                    "{} & {} & {:.3} & {:.2} & {:.1} \\\\",
                    size,
                    entry.record.key.threads,
                    entry.record.mean_seconds(),
                    entry.speedup,
                    entry.efficiency
                )?;
            }
        }

        Ok(rows)
    }
}

fn escape(name: &str) -> String {
    name.replace('_', "\\_")
}
