//! Networking module for onevone.
//!
//! This crate provides the network side of the lookup page:
//!
//! - **HTTP Client**: a thin reqwest wrapper with request builders and
//!   bounded retry
//! - **Champion API**: the one dataset fetch the autocomplete widgets need
//!
//! # Fetching champions
//!
//! ```ignore
//! use onevone_net::{ChampionApi, HttpClient, DEFAULT_CHAMPIONS_ENDPOINT};
//!
//! let client = HttpClient::builder().build()?;
//! let api = ChampionApi::new(client, "http://127.0.0.1:5000", DEFAULT_CHAMPIONS_ENDPOINT)?;
//! for champion in api.fetch_all().await? {
//!     println!("{} ({})", champion.name, champion.id);
//! }
//! ```

pub mod champions;
mod error;
pub mod http;

pub use champions::{
    ApiEnvelope, ChampionApi, ChampionId, ChampionRecord, DEFAULT_CHAMPIONS_ENDPOINT,
};
pub use error::{NetworkError, Result};
pub use http::{HttpClient, HttpClientBuilder, RetryPolicy};
