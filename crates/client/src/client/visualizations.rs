//! Visualization API methods for [`RedashClient`].

use crate::client::RedashClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Visualization, VisualizationCreatePayload, VisualizationUpdatePayload};

impl RedashClient {
    /// Get a visualization by scanning the visualizations of query `query_id`.
    ///
    /// Fails with [`ClientError::NotFound`](crate::ClientError::NotFound) when
    /// the query has no such visualization.
    pub async fn get_visualization(
        &self,
        query_id: i64,
        visualization_id: i64,
    ) -> Result<Visualization> {
        endpoints::get_visualization(&self.transport, query_id, visualization_id).await
    }

    pub async fn create_visualization(
        &self,
        payload: &VisualizationCreatePayload,
    ) -> Result<Visualization> {
        endpoints::create_visualization(&self.transport, payload).await
    }

    pub async fn update_visualization(
        &self,
        id: i64,
        payload: &VisualizationUpdatePayload,
    ) -> Result<Visualization> {
        endpoints::update_visualization(&self.transport, id, payload).await
    }

    pub async fn delete_visualization(&self, id: i64) -> Result<()> {
        endpoints::delete_visualization(&self.transport, id).await
    }
}
