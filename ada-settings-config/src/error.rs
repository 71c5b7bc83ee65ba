//! Typed error variants for the ada-settings-config crate.
//!
//! Save operations return these so callers can distinguish I/O trouble from
//! encoding trouble. Load operations never surface them; loads fall back
//! to defaults and log instead. Application code that runs on `anyhow` gets
//! the coercion for free via the `std::error::Error` impl.

use std::fmt;

/// Errors that can occur when writing a settings file.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred writing the file (permissions, disk full,
    /// missing directory that could not be created).
    Io(std::io::Error),

    /// The personalization record could not be encoded as JSON.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error writing settings: {e}"),
            ConfigError::Json(e) => write!(f, "JSON encode error in settings: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
