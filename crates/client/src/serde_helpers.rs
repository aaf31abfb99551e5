//! Serde helpers for Redash's JSON conventions.
//!
//! Responsibilities:
//! - Provide `skip_serializing_if` predicates that reproduce "omit empty" payload fields.
//! - Provide a deserializer that maps JSON `null` to the type's default.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Payload fields marked with these predicates are dropped when zero, false or empty,
//!   so callers cannot explicitly send `0`, `false` or `""` for them.
//! - Redash returns `null` for many list fields that are otherwise arrays.

use serde::{Deserialize, Deserializer};

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Deserialize a value, treating JSON `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Tagged {
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_as_default_accepts_null() {
        let parsed: Tagged = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_null_as_default_accepts_missing_and_values() {
        let parsed: Tagged = serde_json::from_str("{}").unwrap();
        assert!(parsed.tags.is_empty());

        let parsed: Tagged = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
        assert_eq!(parsed.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_skip_predicates() {
        assert!(is_zero(&0));
        assert!(!is_zero(&7));
        assert!(is_false(&false));
        assert!(!is_false(&true));
    }
}
