//! Authentication types for Redash client configuration.
//!
//! Responsibilities:
//! - Hold the API key used to authenticate every request.
//! - Handle serialization of the secret value.
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate transport).
//!
//! Invariants:
//! - The API key is a `secrecy::SecretString` so it never shows up in `Debug` output.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Opaque API key, sent as `Authorization: Key <api_key>`.
    #[serde(with = "secret_string")]
    pub api_key: SecretString,
}

impl AuthConfig {
    /// Create an auth config from a raw key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_auth_config_debug_redacts_key() {
        let auth = AuthConfig::new("very-secret-key");
        let debug_output = format!("{:?}", auth);
        assert!(!debug_output.contains("very-secret-key"));
    }

    #[test]
    fn test_auth_config_serde_roundtrip() {
        let auth = AuthConfig::new("abc123");
        let json = serde_json::to_string(&auth).unwrap();
        assert_eq!(json, r#"{"api_key":"abc123"}"#);

        let parsed: AuthConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_key.expose_secret(), "abc123");
    }
}
