//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `REDASH_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_API_KEY, ENV_BASE_URL, ENV_STRICT, ENV_TIMEOUT};
use crate::types::Strictness;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(strict) = env_var_or_none(ENV_STRICT) {
        let strictness: Strictness = strict.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_STRICT.to_string(),
            message: "must be strict, lenient, true or false".to_string(),
        })?;
        loader.set_strictness(Some(strictness));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
