//! Configuration type definitions for the Redash client.
//!
//! Responsibilities:
//! - Define connection, authentication, and strictness settings.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
pub(crate) mod connection;
mod strictness;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
pub use strictness::{ParseStrictnessError, Strictness};
