//! Client builder for constructing [`RedashClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and API key
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`RedashClient`] methods)
//! - Reading environment variables (handled by `redash_config::ConfigLoader`)
//!
//! # Invariants
//! - `base_url` must be an absolute http(s) URL with a host
//! - The API key must be non-empty
//! - The timeout must be at least one second and at most `MAX_TIMEOUT_SECS`
//! - Strictness defaults to `Lenient`

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::client::RedashClient;
use crate::endpoints::Transport;
use crate::error::{ClientError, Result};
use redash_config::{
    Config, Strictness,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
    validate_and_normalize_base_url, validate_timeout,
};

/// Builder for creating a new [`RedashClient`].
///
/// # Example
///
/// ```rust,no_run
/// use redash_client::{RedashClient, Strictness};
/// use std::time::Duration;
///
/// let client = RedashClient::builder()
///     .base_url("https://redash.example.com".to_string())
///     .api_key("my-api-key")
///     .strictness(Strictness::Strict)
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok::<(), redash_client::ClientError>(())
/// ```
pub struct RedashClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    strictness: Strictness,
    timeout: Duration,
}

impl Default for RedashClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            strictness: Strictness::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RedashClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Redash server, e.g. `https://redash.example.com`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the user or service API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(key.into().into()));
        self
    }

    /// Set how unknown destination options are handled. Default is lenient.
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_key = Some(config.auth.api_key.clone());
        self.strictness = config.strictness;
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`RedashClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an
    /// absolute http(s) URL.
    /// Returns [`ClientError::MissingApiKey`] if the key is missing or blank.
    /// Returns [`ClientError::InvalidTimeout`] if the timeout is zero or above
    /// `MAX_TIMEOUT_SECS`.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<RedashClient> {
        let raw_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = validate_and_normalize_base_url(&raw_url)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        validate_timeout(self.timeout).map_err(|e| ClientError::InvalidTimeout(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        tracing::debug!(base_url = %base_url, strictness = %self.strictness, "Built Redash client");

        Ok(RedashClient {
            transport: Transport::new(http, base_url, api_key),
            strictness: self.strictness,
        })
    }
}
