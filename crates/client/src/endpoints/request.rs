//! HTTP transport shared by every endpoint.
//!
//! Responsibilities:
//! - Hold the `reqwest::Client`, the normalized base URL and the API key.
//! - Build GET/POST/DELETE requests with `Authorization: Key <api_key>`.
//! - Map non-2xx responses to [`ClientError::ApiError`] before any decoding.
//! - Encode request payloads and decode response bodies.
//!
//! Does NOT handle:
//! - Retries, caching or rate limiting. Every error goes straight back to the caller.
//!
//! Invariants:
//! - `base_url` has no trailing slash and every `path` starts with `/`.
//! - The API key is only ever exposed when writing the header.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ErrorBody;

/// Query-string parameters. Values are percent-encoded by reqwest.
pub type QueryParams<'a> = &'a [(&'a str, String)];

/// Authenticated HTTP access to one Redash instance.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl Transport {
    /// Create a transport. `base_url` must already be normalized.
    pub fn new(http: reqwest::Client, base_url: String, api_key: SecretString) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request.
    pub async fn get(&self, path: &str, query: QueryParams<'_>) -> Result<Response> {
        let builder = self.request(Method::GET, path, query)?;
        send_request(builder, path, "GET").await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Vec<u8>, query: QueryParams<'_>) -> Result<Response> {
        let builder = self
            .request(Method::POST, path, query)?
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        send_request(builder, path, "POST").await
    }

    /// Issue a DELETE request.
    pub async fn delete(&self, path: &str, query: QueryParams<'_>) -> Result<Response> {
        let builder = self.request(Method::DELETE, path, query)?;
        send_request(builder, path, "DELETE").await
    }

    fn request(&self, method: Method, path: &str, query: QueryParams<'_>) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Key {}", self.api_key.expose_secret()));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        Ok(builder)
    }

    fn url(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ClientError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }
}

/// Send a request and turn any non-2xx status into [`ClientError::ApiError`].
///
/// The error message is taken from Redash's `{"message": ...}` body when it
/// has one, otherwise the raw body text is used.
pub async fn send_request(builder: RequestBuilder, path: &str, method: &str) -> Result<Response> {
    debug!(method, path, "Sending Redash request");

    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    };

    debug!(method, path, status = status.as_u16(), "Redash request failed");

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Serialize a request payload to JSON bytes.
pub fn encode_body<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(ClientError::Encode)
}

/// Read a response body and decode it as `T`.
pub async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
        path: path.to_string(),
        source,
    })
}
