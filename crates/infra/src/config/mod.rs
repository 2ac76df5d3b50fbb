//! Runtime configuration for the remote API and export targets.

mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Remote roster API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the roster service, e.g. `http://localhost:8000`.
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Spreadsheet export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Directory workbook files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { output_dir: default_output_dir() }
    }
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_output_dir() -> String {
    ".".to_string()
}
