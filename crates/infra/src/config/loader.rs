//! Configuration loader
//!
//! Loads SDK configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Seeds the process environment from a `.env` file, if one exists
//! 2. Attempts to load from environment variables
//! 3. If the credentials are missing, falls back to loading from file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TRADELINE_CLIENT_ID`: Partner client id (required)
//! - `TRADELINE_CLIENT_SECRET`: Partner client secret (required)
//! - `TRADELINE_BASE_URL`: API base URL
//! - `TRADELINE_TIMEOUT_SECS`: Request timeout in seconds
//! - `TRADELINE_LOG_LEVEL`: Log filter directive
//! - `TRADELINE_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tradeline.json` or `./tradeline.toml` (current working directory)
//! 2. `../tradeline.json` or `../tradeline.toml` (parent directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use tradeline_domain::{
    ApiConfig, ClientCredentials, LoggingConfig, Result, TradelineConfig, TradelineError,
};

const ENV_CLIENT_ID: &str = "TRADELINE_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "TRADELINE_CLIENT_SECRET";
const ENV_BASE_URL: &str = "TRADELINE_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "TRADELINE_TIMEOUT_SECS";
const ENV_LOG_LEVEL: &str = "TRADELINE_LOG_LEVEL";
const ENV_LOG_JSON: &str = "TRADELINE_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 2] = ["tradeline.json", "tradeline.toml"];

/// Load configuration with automatic fallback strategy
///
/// Reads a `.env` file first (variables already set in the process win),
/// then the environment. Only when the credentials are not in the
/// environment does it fall back to a config file; any other environment
/// error is returned unchanged.
///
/// # Errors
/// Returns `TradelineError::Config` if:
/// - An environment variable has an invalid value
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<TradelineConfig> {
    load_dotenv();

    if !credentials_in_env() {
        tracing::debug!("Credentials not set in environment, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Both credential variables are present.
fn credentials_in_env() -> bool {
    std::env::var_os(ENV_CLIENT_ID).is_some() && std::env::var_os(ENV_CLIENT_SECRET).is_some()
}

/// Load configuration from environment variables
///
/// Only the credentials are required; everything else falls back to the
/// defaults of [`ApiConfig`] and [`LoggingConfig`].
///
/// # Errors
/// Returns `TradelineError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<TradelineConfig> {
    let credentials = ClientCredentials::new(env_var(ENV_CLIENT_ID)?, env_var(ENV_CLIENT_SECRET)?);

    let mut api = ApiConfig::default();
    if let Some(base_url) = optional_env_var(ENV_BASE_URL) {
        api.base_url = base_url;
    }
    if let Some(timeout) = optional_env_var(ENV_TIMEOUT_SECS) {
        api.timeout_seconds = timeout.parse::<u64>().map_err(|e| {
            TradelineError::Config(format!("Invalid {ENV_TIMEOUT_SECS} value '{timeout}': {e}"))
        })?;
    }

    let mut logging = LoggingConfig::default();
    if let Some(level) = optional_env_var(ENV_LOG_LEVEL) {
        logging.level = level;
    }
    logging.json = env_bool(ENV_LOG_JSON, logging.json);

    Ok(TradelineConfig { credentials, api, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TradelineError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<TradelineConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TradelineError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TradelineError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TradelineError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<TradelineConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TradelineError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TradelineError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TradelineError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the directory
/// of the running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Populate the environment from `./.env` without overriding variables
/// that are already set.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Failed to read .env file"),
    }
}

/// Get required environment variable
///
/// # Errors
/// Returns `TradelineError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        TradelineError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Blank values count as unset.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
