//! Visualization endpoints.
//!
//! Like widgets, visualizations have no single-item GET; [`get_visualization`]
//! reads the parent query and scans its visualizations.

use tracing::debug;

use crate::endpoints::queries::get_query;
use crate::endpoints::request::{Transport, decode, encode_body};
use crate::error::{ClientError, Result};
use crate::models::{Visualization, VisualizationCreatePayload, VisualizationUpdatePayload};

const VISUALIZATIONS_PATH: &str = "/api/visualizations";

fn visualization_path(id: i64) -> String {
    format!("{VISUALIZATIONS_PATH}/{id}")
}

/// Look up a visualization belonging to query `query_id`.
///
/// # Errors
///
/// Returns [`ClientError::NotFound`] when the query has no visualization with
/// that id.
pub async fn get_visualization(
    transport: &Transport,
    query_id: i64,
    visualization_id: i64,
) -> Result<Visualization> {
    let query = get_query(transport, query_id).await?;
    debug!(
        query_id,
        visualization_id,
        visualizations = query.visualizations.len(),
        "Scanning query visualizations"
    );

    query.into_visualization(visualization_id).ok_or_else(|| {
        ClientError::NotFound(format!("visualization {visualization_id} on query {query_id}"))
    })
}

pub async fn create_visualization(
    transport: &Transport,
    payload: &VisualizationCreatePayload,
) -> Result<Visualization> {
    let body = encode_body(payload)?;
    let response = transport.post(VISUALIZATIONS_PATH, body, &[]).await?;
    decode(response, VISUALIZATIONS_PATH).await
}

pub async fn update_visualization(
    transport: &Transport,
    id: i64,
    payload: &VisualizationUpdatePayload,
) -> Result<Visualization> {
    let path = visualization_path(id);
    let body = encode_body(payload)?;
    let response = transport.post(&path, body, &[]).await?;
    decode(response, &path).await
}

pub async fn delete_visualization(transport: &Transport, id: i64) -> Result<()> {
    transport.delete(&visualization_path(id), &[]).await?;
    Ok(())
}
