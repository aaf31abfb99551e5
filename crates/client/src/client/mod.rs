//! Main Redash REST API client and API methods.
//!
//! This module provides the primary [`RedashClient`] for interacting with the
//! Redash REST API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `queries`, `dashboards`, `widgets`, `visualizations`: content methods
//! - `alerts`: Alert and alert subscription methods
//! - `destinations`: Destination methods, including option validation
//! - `query_snippets`: Query snippet methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - The validation rules themselves (see [`crate::validation`])
//!
//! # Invariants
//! - The client is immutable after `build()`; every method takes `&self`.
//! - Each method performs at most two sequential remote calls and never retries.

pub mod builder;

mod alerts;
mod dashboards;
mod destinations;
mod queries;
mod query_snippets;
mod visualizations;
mod widgets;

use redash_config::Strictness;

use crate::endpoints::Transport;

/// Redash REST API client.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use redash_client::RedashClient;
///
/// # async fn run() -> redash_client::Result<()> {
/// let client = RedashClient::builder()
///     .base_url("https://redash.example.com/".to_string())
///     .api_key("my-api-key")
///     .build()?;
///
/// let query = client.get_query(1).await?;
/// println!("{}", query.name);
/// # Ok(())
/// # }
/// ```
///
/// The client is cheap to clone and can be shared across tasks; it adds no
/// synchronization of its own on top of `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct RedashClient {
    pub(crate) transport: Transport,
    pub(crate) strictness: Strictness,
}

impl RedashClient {
    /// Create a new client builder.
    pub fn builder() -> builder::RedashClientBuilder {
        builder::RedashClientBuilder::new()
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// How unknown destination options are handled.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Access the underlying transport for endpoints this client does not wrap.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}
