//! Error types for the lookup page.

use std::path::PathBuf;

use onevone_net::NetworkError;

/// Result type alias for page operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while bootstrapping the page.
///
/// Widget interaction itself never fails; only the dataset load and the
/// configuration layer produce errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching the champion dataset failed.
    #[error("Failed to load champions: {0}")]
    Network(#[from] NetworkError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The champion dataset was fetched but contains no names.
    #[error("Champion dataset is empty")]
    EmptyDataset,
}

/// Errors raised while loading an [`AppConfig`](crate::config::AppConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML document is invalid.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document is invalid.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension names no supported format.
    #[error("Unsupported config format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
