//! Dashboard endpoints.
//!
//! Reads and archives address a dashboard by slug; updates use its numeric id.

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{Transport, decode, encode_body};
use crate::error::Result;
use crate::models::{Dashboard, DashboardCreatePayload, DashboardUpdatePayload, Page};

const DASHBOARDS_PATH: &str = "/api/dashboards";

fn slug_path(slug: &str) -> String {
    format!("{DASHBOARDS_PATH}/{}", encode_path_segment(slug))
}

pub async fn list_dashboards(
    transport: &Transport,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Result<Page<Dashboard>> {
    let mut params = Vec::new();
    if let Some(p) = page {
        params.push(("page", p.to_string()));
    }
    if let Some(s) = page_size {
        params.push(("page_size", s.to_string()));
    }

    let response = transport.get(DASHBOARDS_PATH, &params).await?;
    decode(response, DASHBOARDS_PATH).await
}

/// Fetch a dashboard, including its widgets, by slug.
pub async fn get_dashboard(transport: &Transport, slug: &str) -> Result<Dashboard> {
    let path = slug_path(slug);
    let response = transport.get(&path, &[]).await?;
    decode(response, &path).await
}

pub async fn create_dashboard(
    transport: &Transport,
    payload: &DashboardCreatePayload,
) -> Result<Dashboard> {
    let body = encode_body(payload)?;
    let response = transport.post(DASHBOARDS_PATH, body, &[]).await?;
    decode(response, DASHBOARDS_PATH).await
}

pub async fn update_dashboard(
    transport: &Transport,
    id: i64,
    payload: &DashboardUpdatePayload,
) -> Result<Dashboard> {
    let path = format!("{DASHBOARDS_PATH}/{id}");
    let body = encode_body(payload)?;
    let response = transport.post(&path, body, &[]).await?;
    decode(response, &path).await
}

pub async fn archive_dashboard(transport: &Transport, slug: &str) -> Result<()> {
    transport.delete(&slug_path(slug), &[]).await?;
    Ok(())
}
