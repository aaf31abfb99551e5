//! Query API methods for [`RedashClient`].
//!
//! # What this module handles:
//! - Listing, reading, creating and updating saved queries
//! - Archiving queries
//!
//! # What this module does NOT handle:
//! - Low-level query endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::RedashClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Page, Query, QueryCreatePayload, QueryUpdatePayload};

impl RedashClient {
    /// List saved queries. `None` leaves paging to the server defaults.
    pub async fn list_queries(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Page<Query>> {
        endpoints::list_queries(&self.transport, page, page_size).await
    }

    /// Get a query, including its visualizations.
    pub async fn get_query(&self, id: i64) -> Result<Query> {
        endpoints::get_query(&self.transport, id).await
    }

    pub async fn create_query(&self, payload: &QueryCreatePayload) -> Result<Query> {
        endpoints::create_query(&self.transport, payload).await
    }

    pub async fn update_query(&self, id: i64, payload: &QueryUpdatePayload) -> Result<Query> {
        endpoints::update_query(&self.transport, id, payload).await
    }

    /// Archive (soft-delete) a query.
    pub async fn archive_query(&self, id: i64) -> Result<()> {
        endpoints::archive_query(&self.transport, id).await
    }
}
