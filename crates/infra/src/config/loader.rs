//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ROSTERLINE_API_BASE_URL`: Base URL of the roster service (required)
//! - `ROSTERLINE_API_TIMEOUT`: Request timeout in seconds
//! - `ROSTERLINE_EXPORT_DIR`: Directory workbook exports are written into
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./rosterline.json` or `./rosterline.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use rosterline_domain::{Result, RosterError};

use super::{ApiConfig, Config, ExportConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `RosterError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `ROSTERLINE_API_BASE_URL` must be present; the remaining variables fall
/// back to their defaults.
///
/// # Errors
/// Returns `RosterError::Config` if the base URL is missing or a numeric
/// variable fails to parse.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("ROSTERLINE_API_BASE_URL")?;
    let timeout_seconds = match std::env::var("ROSTERLINE_API_TIMEOUT") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| RosterError::Config(format!("Invalid API timeout: {}", e)))?,
        Err(_) => super::default_timeout_seconds(),
    };
    let output_dir =
        std::env::var("ROSTERLINE_EXPORT_DIR").unwrap_or_else(|_| super::default_output_dir());

    Ok(Config {
        api: ApiConfig { base_url, timeout_seconds },
        export: ExportConfig { output_dir },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RosterError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RosterError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RosterError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RosterError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `RosterError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RosterError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RosterError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RosterError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the executable's
/// directory for `config.{json,toml}` or `rosterline.{json,toml}`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("rosterline.json"),
            cwd.join("rosterline.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("rosterline.json"),
                exe_dir.join("rosterline.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `RosterError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| RosterError::Config(format!("Missing required environment variable: {}", key)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("ROSTERLINE_API_BASE_URL", "http://localhost:9000");
        std::env::set_var("ROSTERLINE_API_TIMEOUT", "30");
        std::env::set_var("ROSTERLINE_EXPORT_DIR", "/tmp/exports");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.export.output_dir, "/tmp/exports");

        std::env::remove_var("ROSTERLINE_API_BASE_URL");
        std::env::remove_var("ROSTERLINE_API_TIMEOUT");
        std::env::remove_var("ROSTERLINE_EXPORT_DIR");
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("ROSTERLINE_API_BASE_URL", "http://localhost:9000");
        std::env::remove_var("ROSTERLINE_API_TIMEOUT");
        std::env::remove_var("ROSTERLINE_EXPORT_DIR");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.export.output_dir, ".");

        std::env::remove_var("ROSTERLINE_API_BASE_URL");
    }

    #[test]
    fn test_load_from_env_missing_base_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::remove_var("ROSTERLINE_API_BASE_URL");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, RosterError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("ROSTERLINE_API_BASE_URL", "http://localhost:9000");
        std::env::set_var("ROSTERLINE_API_TIMEOUT", "not-a-number");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, RosterError::Config(_)), "Should be a Config error");

        std::env::remove_var("ROSTERLINE_API_BASE_URL");
        std::env::remove_var("ROSTERLINE_API_TIMEOUT");
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "api": {
                "base_url": "http://localhost:8000",
                "timeout_seconds": 20
            },
            "export": {
                "output_dir": "exports"
            }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config from JSON file");
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_seconds, 20);
        assert_eq!(config.export.output_dir, "exports");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml_with_defaults() {
        let toml_content = r#"
[api]
base_url = "http://localhost:8000"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config from TOML file");
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.export.output_dir, ".");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        let err = result.unwrap_err();
        assert!(matches!(err, RosterError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let invalid_json = r#"{ "this is": "not valid json" "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_json.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", &PathBuf::from("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
