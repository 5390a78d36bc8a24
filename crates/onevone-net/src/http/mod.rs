//! HTTP client for onevone.
//!
//! # Example
//!
//! ```ignore
//! use onevone_net::http::{HttpClient, RetryPolicy};
//!
//! let client = HttpClient::builder().build()?;
//! let response = client
//!     .get("http://127.0.0.1:5000/api/v0/champions")
//!     .header("Accept", "application/json")
//!     .send_with_retry(&RetryPolicy::default())
//!     .await?;
//! println!("Body: {}", response.text().await?);
//! ```

mod client;
mod request;
mod response;
mod retry;

pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig};
pub use request::{HttpRequest, HttpRequestBuilder};
pub use response::HttpResponse;
pub use retry::{RetryDecision, RetryPolicy, classify};
