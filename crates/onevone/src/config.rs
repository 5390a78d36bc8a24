//! Application configuration.
//!
//! [`AppConfig`] gathers everything the page needs to boot: where the
//! champion API lives, how the HTTP client behaves, the retry policy and the
//! widget tuning knobs. Every field has a default, so an empty document is a
//! valid configuration.
//!
//! # Loading
//!
//! ```ignore
//! use onevone::config::AppConfig;
//!
//! // Format picked from the file extension (.toml or .json)
//! let config = AppConfig::load("onevone.toml")?;
//!
//! // Or straight from a string
//! let config = AppConfig::from_toml_str(r#"
//! base_url = "https://onevone.example"
//!
//! [widget]
//! max_results = 6
//! "#)?;
//! ```

use std::path::Path;
use std::time::Duration;

use onevone_net::{DEFAULT_CHAMPIONS_ENDPOINT, HttpClient, HttpClientBuilder, RetryPolicy};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::widget::autocomplete::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_QUERY_LEN};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default prefix of matchup page paths.
pub const DEFAULT_MATCHUP_PREFIX: &str = "/matchup";

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scheme and host of the API server.
    pub base_url: String,
    /// Path of the champion collection endpoint.
    pub champions_endpoint: String,
    /// Prefix of the matchup page path.
    pub matchup_prefix: String,
    /// HTTP client settings.
    pub http: HttpSettings,
    /// Retry policy for the dataset fetch.
    pub retry: RetryPolicy,
    /// Autocomplete tuning.
    pub widget: WidgetConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            champions_endpoint: DEFAULT_CHAMPIONS_ENDPOINT.to_string(),
            matchup_prefix: DEFAULT_MATCHUP_PREFIX.to_string(),
            http: HttpSettings::default(),
            retry: RetryPolicy::default(),
            widget: WidgetConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = parse(&source)?;
        tracing::debug!(target: "onevone::bootstrap", path = %path.display(), "config loaded");
        Ok(config)
    }
}

/// HTTP client settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Overall request timeout in seconds. Zero disables the timeout.
    pub timeout_secs: u64,
    /// User-Agent override.
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: None,
        }
    }
}

impl HttpSettings {
    /// A client builder configured from these settings.
    pub fn client_builder(&self) -> HttpClientBuilder {
        let mut builder = HttpClient::builder();
        builder = if self.timeout_secs == 0 {
            builder.no_timeout()
        } else {
            builder.timeout(Duration::from_secs(self.timeout_secs))
        };
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        builder
    }
}

/// Autocomplete widget tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Maximum number of suggestions shown.
    pub max_results: usize,
    /// Minimum query length before suggestions appear.
    pub min_query_len: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}
