//! Scaling analysis CLI
//!
//! Scans a directory of raw benchmark timing files, prints a run summary,
//! and writes the full report set (CSV, JSON, LaTeX, Markdown, SVG
//! charts) to the output directory.
//!
//! # Usage
//!
//! ```bash
//! # Analyze ./Resultados and write reports to the current directory
//! scaling-report
//!
//! # Explicit locations
//! scaling-report --results-dir runs/2024-03 --output-dir reports
//!
//! # With a configuration file
//! scaling-report --config analysis.toml
//! ```

use anyhow::Context;
use clap::Parser;
use scaling_core::{ingest, Config, ConsoleReporter, ReportWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Aggregate parallel-benchmark timing files and generate scaling reports
#[derive(Parser)]
#[command(name = "scaling-report", version, about)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the raw .dat result files
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Directory report artifacts are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.results_dir {
        config.analysis.results_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.analysis.output_dir = dir;
    }

    let results = ingest(&config.analysis.results_dir).with_context(|| {
        format!(
            "failed to scan results directory {}",
            config.analysis.results_dir.display()
        )
    })?;

    if results.is_empty() {
        println!(
            "No result files found in {}",
            config.analysis.results_dir.display()
        );
        return Ok(());
    }

    print!("{}", ConsoleReporter::format(&results)?);

    let writer = ReportWriter::new(&config.analysis.output_dir);
    let written = writer
        .write_all(&results, &config)
        .context("failed to write report artifacts")?;
    info!(count = written.len(), "reports written");

    Ok(())
}
