//! HTTP request types and builder.

use std::time::Duration;

use super::client::HttpClient;
use super::response::HttpResponse;
use super::retry::{RetryPolicy, execute_with_retry};
use crate::error::Result;

/// A fully built GET request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Request URL (without the query pairs below).
    pub url: String,
    /// Request headers.
    pub headers: http::HeaderMap,
    /// Query parameters appended to the URL.
    pub query: Vec<(String, String)>,
    /// Per-request timeout overriding the client default.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Send this request once.
    pub(crate) async fn execute(&self, client: &HttpClient) -> Result<HttpResponse> {
        let mut url = url::Url::parse(&self.url)?;
        for (key, value) in &self.query {
            url.query_pairs_mut().append_pair(key, value);
        }

        let mut req_builder = client.reqwest_client().get(url);

        for (name, value) in self.headers.iter() {
            req_builder = req_builder.header(name, value);
        }

        if let Some(timeout) = self.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        let response = req_builder.send().await?;
        Ok(HttpResponse::from_reqwest(response))
    }
}

/// Builder for HTTP requests.
pub struct HttpRequestBuilder {
    client: HttpClient,
    url: String,
    headers: http::HeaderMap,
    query: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl HttpRequestBuilder {
    pub(crate) fn new(client: HttpClient, url: String) -> Self {
        Self {
            client,
            url,
            headers: http::HeaderMap::new(),
            query: Vec::new(),
            timeout: None,
        }
    }

    /// Add a header. Invalid names or values are ignored.
    pub fn header(
        mut self,
        name: impl TryInto<http::HeaderName>,
        value: impl TryInto<http::HeaderValue>,
    ) -> Self {
        if let (Ok(name), Ok(value)) = (name.try_into(), value.try_into()) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the request without sending it.
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            url: self.url,
            headers: self.headers,
            query: self.query,
            timeout: self.timeout,
        }
    }

    /// Send the request once.
    pub async fn send(self) -> Result<HttpResponse> {
        let client = self.client.clone();
        let request = self.build();
        request.execute(&client).await
    }

    /// Send the request, retrying transient failures according to `policy`.
    ///
    /// Non-success responses that are not retried, or that remain after the
    /// last attempt, are returned as [`NetworkError::HttpStatus`](crate::NetworkError::HttpStatus).
    pub async fn send_with_retry(self, policy: &RetryPolicy) -> Result<HttpResponse> {
        let client = self.client.clone();
        let request = self.build();
        execute_with_retry(&client, &request, policy).await
    }
}
