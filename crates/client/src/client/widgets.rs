//! Widget API methods for [`RedashClient`].

use crate::client::RedashClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Widget, WidgetCreatePayload, WidgetUpdatePayload};

impl RedashClient {
    /// Get a widget by scanning the widgets of dashboard `dashboard_slug`.
    ///
    /// Fails with [`ClientError::NotFound`](crate::ClientError::NotFound) when
    /// the dashboard has no such widget.
    pub async fn get_widget(&self, dashboard_slug: &str, widget_id: i64) -> Result<Widget> {
        endpoints::get_widget(&self.transport, dashboard_slug, widget_id).await
    }

    pub async fn create_widget(&self, payload: &WidgetCreatePayload) -> Result<Widget> {
        endpoints::create_widget(&self.transport, payload).await
    }

    pub async fn update_widget(&self, id: i64, payload: &WidgetUpdatePayload) -> Result<Widget> {
        endpoints::update_widget(&self.transport, id, payload).await
    }

    pub async fn delete_widget(&self, id: i64) -> Result<()> {
        endpoints::delete_widget(&self.transport, id).await
    }
}
