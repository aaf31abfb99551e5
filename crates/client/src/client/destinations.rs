//! Destination API methods for [`RedashClient`].
//!
//! # What this module handles:
//! - Listing, reading and deleting destinations
//! - Fetching destination types
//! - Validating options before every create and update
//!
//! # What this module does NOT handle:
//! - The validation rules (in [`crate::validation`])
//!
//! # Invariants
//! - Destination types are fetched fresh for every validation.
//! - A validation failure returns before the create/update request is sent.

use crate::client::RedashClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Destination, DestinationType};
use crate::validation::validate_destination_options;

impl RedashClient {
    pub async fn list_destinations(&self) -> Result<Vec<Destination>> {
        endpoints::list_destinations(&self.transport).await
    }

    pub async fn get_destination(&self, id: i64) -> Result<Destination> {
        endpoints::get_destination(&self.transport, id).await
    }

    /// List every destination type registered with the server.
    pub async fn list_destination_types(&self) -> Result<Vec<DestinationType>> {
        endpoints::list_destination_types(&self.transport).await
    }

    /// Check `destination.options` against the server's schema for its type.
    ///
    /// In lenient mode unknown options are removed from `destination`.
    pub async fn sanitize_destination_options(&self, destination: &mut Destination) -> Result<()> {
        let types = self.list_destination_types().await?;
        validate_destination_options(destination, &types, self.strictness)?;
        Ok(())
    }

    /// Validate and create a destination.
    pub async fn create_destination(&self, destination: &mut Destination) -> Result<Destination> {
        self.sanitize_destination_options(destination).await?;
        endpoints::create_destination(&self.transport, destination).await
    }

    /// Validate and update destination `id`.
    pub async fn update_destination(
        &self,
        id: i64,
        destination: &mut Destination,
    ) -> Result<Destination> {
        self.sanitize_destination_options(destination).await?;
        endpoints::update_destination(&self.transport, id, destination).await
    }

    pub async fn delete_destination(&self, id: i64) -> Result<()> {
        endpoints::delete_destination(&self.transport, id).await
    }
}
