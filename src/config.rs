use crate::error::{Result, VerfileError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Returns the version used to seed a fresh version file.
fn default_version() -> String {
    "0.0.1".to_string()
}

/// Configuration for verfile.
///
/// Everything is optional; with no config file present the tool falls back
/// to the `VERSION_FILE` environment variable and `*.version` discovery.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Pinned version-file path, skipping discovery
    #[serde(default)]
    pub version_file: Option<String>,

    /// Version written by `install` when none is given
    #[serde(default = "default_version")]
    pub default_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: None,
            default_version: default_version(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `verfile.toml` in the current directory
/// 3. `verfile.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error; a missing
/// file is not.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./verfile.toml").exists() {
        fs::read_to_string("./verfile.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("verfile.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| VerfileError::config(format!("Invalid configuration: {}", e)))
}
