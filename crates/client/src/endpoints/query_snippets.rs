//! Query snippet endpoints.

use crate::endpoints::request::{Transport, decode, encode_body};
use crate::error::Result;
use crate::models::{CreateQuerySnippetPayload, QuerySnippet, UpdateQuerySnippetPayload};

const SNIPPETS_PATH: &str = "/api/query_snippets";

fn snippet_path(id: i64) -> String {
    format!("{SNIPPETS_PATH}/{id}")
}

pub async fn list_query_snippets(transport: &Transport) -> Result<Vec<QuerySnippet>> {
    let response = transport.get(SNIPPETS_PATH, &[]).await?;
    decode(response, SNIPPETS_PATH).await
}

pub async fn get_query_snippet(transport: &Transport, id: i64) -> Result<QuerySnippet> {
    let path = snippet_path(id);
    let response = transport.get(&path, &[]).await?;
    decode(response, &path).await
}

pub async fn create_query_snippet(
    transport: &Transport,
    payload: &CreateQuerySnippetPayload,
) -> Result<QuerySnippet> {
    let body = encode_body(payload)?;
    let response = transport.post(SNIPPETS_PATH, body, &[]).await?;
    decode(response, SNIPPETS_PATH).await
}

pub async fn update_query_snippet(
    transport: &Transport,
    id: i64,
    payload: &UpdateQuerySnippetPayload,
) -> Result<QuerySnippet> {
    let path = snippet_path(id);
    let body = encode_body(payload)?;
    let response = transport.post(&path, body, &[]).await?;
    decode(response, &path).await
}

pub async fn delete_query_snippet(transport: &Transport, id: i64) -> Result<()> {
    transport.delete(&snippet_path(id), &[]).await?;
    Ok(())
}
