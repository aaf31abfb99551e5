//! Connection configuration types for the Redash client.
//!
//! Responsibilities:
//! - Define connection settings (base URL, timeout).
//! - Define the main `Config` structure combining connection, auth and strictness.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - A `Config` is immutable once handed to the client.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::auth::AuthConfig;
use crate::types::strictness::Strictness;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a Redash instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Redash server (e.g., https://redash.example.com)
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_timeout")]
    pub timeout: Duration,
}

pub(crate) fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Handling of unrecognized destination option fields
    #[serde(default)]
    pub strictness: Strictness,
}

impl Config {
    /// Create a new config with the specified base URL and API key, using
    /// default timeout and lenient strictness.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                timeout: default_timeout(),
            },
            auth: AuthConfig::new(api_key),
            strictness: Strictness::default(),
        }
    }

    /// Return a copy of this config with the given strictness.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}
