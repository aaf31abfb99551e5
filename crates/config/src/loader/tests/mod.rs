//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Every env-driven test pins all `REDASH_*` variables via `temp_env`.


/// All `REDASH_*` variables unset, for use with `temp_env::with_vars`.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("REDASH_URL", None),
        ("REDASH_API_KEY", None),
        ("REDASH_STRICT", None),
        ("REDASH_TIMEOUT", None),
    ]
}
