//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Redash client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//! - Every client built here authenticates with the key `test-key`
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

// Re-export test utilities from redash-client
#[allow(unused_imports)]
pub use redash_client::testing::{destination_type, load_fixture};

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use redash_client::{ClientError, RedashClient, Strictness};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key every test client sends.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-key";

/// Build a lenient client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> RedashClient {
    client_with_strictness(server, Strictness::Lenient)
}

/// Build a client pointed at the mock server with the given strictness.
#[allow(dead_code)]
pub fn client_with_strictness(server: &MockServer, strictness: Strictness) -> RedashClient {
    RedashClient::builder()
        .base_url(server.uri())
        .api_key(TEST_API_KEY)
        .strictness(strictness)
        .build()
        .expect("client should build against mock server")
}
