use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for hovertip
#[derive(Debug, Error)]
pub enum HovertipError {
    #[error("Invalid selector: {0:?}")]
    InvalidSelector(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
