//! Dashboard API methods for [`RedashClient`].
//!
//! # What this module handles:
//! - Listing dashboards
//! - Getting a dashboard by slug, with its widgets
//! - Creating, updating and archiving dashboards
//!
//! # What this module does NOT handle:
//! - Low-level dashboard endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::RedashClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Dashboard, DashboardCreatePayload, DashboardUpdatePayload, Page};

impl RedashClient {
    pub async fn list_dashboards(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Page<Dashboard>> {
        endpoints::list_dashboards(&self.transport, page, page_size).await
    }

    /// Get a dashboard by its slug.
    pub async fn get_dashboard(&self, slug: &str) -> Result<Dashboard> {
        endpoints::get_dashboard(&self.transport, slug).await
    }

    pub async fn create_dashboard(&self, payload: &DashboardCreatePayload) -> Result<Dashboard> {
        endpoints::create_dashboard(&self.transport, payload).await
    }

    /// Update a dashboard by numeric id.
    pub async fn update_dashboard(
        &self,
        id: i64,
        payload: &DashboardUpdatePayload,
    ) -> Result<Dashboard> {
        endpoints::update_dashboard(&self.transport, id, payload).await
    }

    /// Archive a dashboard by slug.
    pub async fn archive_dashboard(&self, slug: &str) -> Result<()> {
        endpoints::archive_dashboard(&self.transport, slug).await
    }
}
