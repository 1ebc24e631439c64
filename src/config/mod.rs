//! Configuration loading
//!
//! Reads `config.toml` from `$CONFIG_DIR/hovertip/` unless an explicit path
//! is given. A missing default file is not an error; a missing explicit one is.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HovertipError;

pub use types::{Config, DEFAULT_FADE_MS, DEFAULT_SHOW_DELAY_MS, TooltipOptions};

/// Location of the default config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hovertip").join("config.toml"))
}

/// Parse config file contents
pub fn parse_config(path: &Path, contents: &str) -> Result<Config, HovertipError> {
    toml::from_str(contents).map_err(|e| HovertipError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Load configuration from `path`, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config, HovertipError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(HovertipError::ConfigNotFound(path.to_path_buf()));
            }
            read_config(path)
        }
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<Config, HovertipError> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config(path, &contents)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
