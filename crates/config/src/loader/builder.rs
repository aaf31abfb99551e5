//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from `.env` files, environment variables, and direct builder methods.
//! - Validate and build the final immutable `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Later calls win: a builder method applied after `from_env()` overrides the env value.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig, Strictness};

/// Configuration loader that builds config from environment variables and builder calls.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    strictness: Option<Strictness>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `REDASH_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set how unknown destination options are handled.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = Some(strictness);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingBaseUrl`] when no base URL was provided.
    /// - [`ConfigError::InvalidValue`] when the base URL is not an absolute http(s) URL.
    /// - [`ConfigError::MissingApiKey`] when the key is absent or blank.
    /// - [`ConfigError::InvalidTimeout`] when the timeout is zero or above the maximum.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;

        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let connection = ConnectionConfig {
            base_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        validate_timeout(connection.timeout)?;

        Ok(Config {
            connection,
            auth: AuthConfig { api_key },
            strictness: self.strictness.unwrap_or_default(),
        })
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_strictness(&mut self, strictness: Option<Strictness>) {
        self.strictness = strictness;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

/// Validates the request timeout is greater than 0 and not above `MAX_TIMEOUT_SECS`.
pub fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let timeout_secs = timeout.as_secs();

    if timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }

    if timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }

    Ok(())
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing (returns Err(ConfigError::MissingBaseUrl))
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Reject query strings and fragments, since request paths are appended to the base
/// - Normalize by stripping trailing slash
pub fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://redash.example.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://redash.example.com), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://redash.example.com)".into(),
        });
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "must not contain a query string or fragment (e.g. https://redash.example.com)"
                .into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
