//! Widget endpoints.
//!
//! There is no `GET /api/widgets/{id}`; [`get_widget`] reads the parent
//! dashboard and scans its embedded widgets.

use tracing::debug;

use crate::endpoints::dashboards::get_dashboard;
use crate::endpoints::request::{Transport, decode, encode_body};
use crate::error::{ClientError, Result};
use crate::models::{Widget, WidgetCreatePayload, WidgetUpdatePayload};

const WIDGETS_PATH: &str = "/api/widgets";

fn widget_path(id: i64) -> String {
    format!("{WIDGETS_PATH}/{id}")
}

/// Look up a widget on the dashboard identified by `dashboard_slug`.
///
/// # Errors
///
/// Returns [`ClientError::NotFound`] when the dashboard has no widget with
/// that id, in addition to any error from fetching the dashboard.
pub async fn get_widget(
    transport: &Transport,
    dashboard_slug: &str,
    widget_id: i64,
) -> Result<Widget> {
    let dashboard = get_dashboard(transport, dashboard_slug).await?;
    debug!(
        dashboard = dashboard_slug,
        widget_id,
        widgets = dashboard.widgets.len(),
        "Scanning dashboard widgets"
    );

    dashboard.into_widget(widget_id).ok_or_else(|| {
        ClientError::NotFound(format!("widget {widget_id} on dashboard '{dashboard_slug}'"))
    })
}

pub async fn create_widget(transport: &Transport, payload: &WidgetCreatePayload) -> Result<Widget> {
    let body = encode_body(payload)?;
    let response = transport.post(WIDGETS_PATH, body, &[]).await?;
    decode(response, WIDGETS_PATH).await
}

pub async fn update_widget(
    transport: &Transport,
    id: i64,
    payload: &WidgetUpdatePayload,
) -> Result<Widget> {
    let path = widget_path(id);
    let body = encode_body(payload)?;
    let response = transport.post(&path, body, &[]).await?;
    decode(response, &path).await
}

pub async fn delete_widget(transport: &Transport, id: i64) -> Result<()> {
    transport.delete(&widget_path(id), &[]).await?;
    Ok(())
}
