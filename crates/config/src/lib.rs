//! Configuration management for the Redash client.
//!
//! This crate provides types and a loader for Redash connection
//! configuration sourced from environment variables and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, env_var_or_none, validate_and_normalize_base_url, validate_timeout,
};
pub use types::{AuthConfig, Config, ConnectionConfig, Strictness};
