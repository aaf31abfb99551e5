//! Centralized constants for the Redash client workspace.
//!
//! Default values and environment variable names shared between the
//! config and client crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URI of the Redash instance.
pub const ENV_BASE_URL: &str = "REDASH_URL";

/// User or service API key.
pub const ENV_API_KEY: &str = "REDASH_API_KEY";

/// Destination option strictness (`strict`, `lenient`, `true`, `false`).
pub const ENV_STRICT: &str = "REDASH_STRICT";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "REDASH_TIMEOUT";
