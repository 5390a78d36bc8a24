//! Champion static data API.
//!
//! The lookup page needs one dataset: every champion's display name and
//! identifier, served by `GET /api/v0/champions` as
//! `{"data": [{"id": 103, "name": "Ahri", ...}, ...]}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::http::{HttpClient, RetryPolicy};

/// Default path of the champion collection endpoint.
pub const DEFAULT_CHAMPIONS_ENDPOINT: &str = "/api/v0/champions";

/// A champion identifier as sent by the API.
///
/// The API emits integers, but string identifiers are accepted as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChampionId {
    /// Numeric identifier.
    Numeric(u64),
    /// Textual identifier.
    Text(String),
}

impl Default for ChampionId {
    fn default() -> Self {
        Self::Numeric(0)
    }
}

impl fmt::Display for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ChampionId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for ChampionId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// One champion record.
///
/// Only `name` is required; everything else defaults when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionRecord {
    /// Identifier, also used to derive the icon reference.
    #[serde(default)]
    pub id: ChampionId,
    /// Display name. Unique across the dataset.
    pub name: String,
    /// Title shown under the name ("the Nine-Tailed Fox").
    #[serde(default)]
    pub title: Option<String>,
    /// Comma-separated role tags.
    #[serde(default)]
    pub tags: Option<String>,
    /// Icon image file name.
    #[serde(default)]
    pub image_blob: Option<String>,
    /// Splash art file name.
    #[serde(default)]
    pub splash_blob: Option<String>,
    /// Game patch this record was captured from.
    #[serde(default)]
    pub patch_version: Option<String>,
}

impl ChampionRecord {
    /// Create a record with just an identifier and a name.
    pub fn new(id: impl Into<ChampionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// The icon sprite class for this champion (`c<id>`).
    pub fn icon_class(&self) -> String {
        format!("c{}", self.id)
    }
}

/// The `{"data": ...}` envelope every API success response uses.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// The payload.
    pub data: T,
}

/// Client for the champion endpoint.
#[derive(Clone, Debug)]
pub struct ChampionApi {
    client: HttpClient,
    url: url::Url,
    retry: RetryPolicy,
}

impl ChampionApi {
    /// Create an API client for `base_url` + `endpoint`.
    pub fn new(client: HttpClient, base_url: &str, endpoint: &str) -> Result<Self> {
        let url = url::Url::parse(base_url)?.join(endpoint)?;
        Ok(Self {
            client,
            url,
            retry: RetryPolicy::default(),
        })
    }

    /// Use a custom retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The resolved endpoint URL.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Fetch every champion record.
    pub async fn fetch_all(&self) -> Result<Vec<ChampionRecord>> {
        tracing::debug!(target: "onevone_net::champions", url = %self.url, "fetching champions");

        let response = self
            .client
            .get(self.url.as_str())
            .header("Accept", "application/json")
            .send_with_retry(&self.retry)
            .await?;

        let envelope: ApiEnvelope<Vec<ChampionRecord>> =
            response.json().await.map_err(|err| match err {
                NetworkError::Json(msg) => {
                    NetworkError::Json(format!("malformed champion payload: {msg}"))
                }
                other => other,
            })?;

        tracing::info!(
            target: "onevone_net::champions",
            count = envelope.data.len(),
            "champions fetched"
        );
        Ok(envelope.data)
    }
}
