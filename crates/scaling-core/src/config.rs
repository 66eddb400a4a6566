//! Configuration for an analysis run
//!
//! TOML-based configuration with defaults for every field, so the tool
//! runs with no config file at all:
//!
//! ```toml
//! [analysis]
//! results_dir = "Resultados"
//! output_dir = "."
//!
//! [plots]
//! sizes = [400, 800, 1200, 1600]
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure loaded from TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Scan input and report output locations
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Plot generation settings
    #[serde(default)]
    pub plots: PlotsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is
    /// malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use scaling_core::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_str(r#"
    ///     [analysis]
    ///     results_dir = "runs/2024-03"
    /// "#)?;
    /// assert_eq!(config.analysis.results_dir.to_str(), Some("runs/2024-03"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Directory holding the raw `.dat` result files (default: `Resultados`)
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Directory report artifacts are written to (default: `.`)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            output_dir: default_output_dir(),
        }
    }
}

/// Plot generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotsConfig {
    /// Matrix sizes to chart; sizes absent from the data are skipped
    /// (default: 400, 800, 1200, 1600)
    #[serde(default = "default_plot_sizes")]
    pub sizes: Vec<u32>,
}

impl Default for PlotsConfig {
    fn default() -> Self {
        Self {
            sizes: default_plot_sizes(),
        }
    }
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("Resultados")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_plot_sizes() -> Vec<u32> {
    vec![400, 800, 1200, 1600]
}
