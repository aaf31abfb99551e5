//! Query snippet API methods for [`RedashClient`].

use crate::client::RedashClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateQuerySnippetPayload, QuerySnippet, UpdateQuerySnippetPayload};

impl RedashClient {
    pub async fn list_query_snippets(&self) -> Result<Vec<QuerySnippet>> {
        endpoints::list_query_snippets(&self.transport).await
    }

    pub async fn get_query_snippet(&self, id: i64) -> Result<QuerySnippet> {
        endpoints::get_query_snippet(&self.transport, id).await
    }

    pub async fn create_query_snippet(
        &self,
        payload: &CreateQuerySnippetPayload,
    ) -> Result<QuerySnippet> {
        endpoints::create_query_snippet(&self.transport, payload).await
    }

    pub async fn update_query_snippet(
        &self,
        id: i64,
        payload: &UpdateQuerySnippetPayload,
    ) -> Result<QuerySnippet> {
        endpoints::update_query_snippet(&self.transport, id, payload).await
    }

    pub async fn delete_query_snippet(&self, id: i64) -> Result<()> {
        endpoints::delete_query_snippet(&self.transport, id).await
    }
}
