pub mod init;
mod schema;

pub use init::write_default_config;
pub use schema::{Config, SearchConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::scoring::validate_scoring;

/// Get the config directory path (~/.config/glohsen-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("glohsen-score"))
}

/// Get the default config file path (~/.config/glohsen-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path and
///   falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => {
            let default_path = get_config_path()?;
            if default_path.exists() {
                read_config(&default_path)
            } else {
                debug!(path = %default_path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Validate every section of the config.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(scoring_errors) = validate_scoring(&config.rubric()) {
        errors.extend(scoring_errors);
    }

    if let Err(e) = config.search_config().to_search() {
        errors.push(format!("search.delay: {:#}", e));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
