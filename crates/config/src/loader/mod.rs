//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration anywhere.
//! - Constructing the HTTP client (see client crate builder).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` override environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::{ConfigLoader, validate_and_normalize_base_url, validate_timeout};
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
