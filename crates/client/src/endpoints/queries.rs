//! Query endpoints.

use crate::endpoints::request::{Transport, decode, encode_body};
use crate::error::Result;
use crate::models::{Page, Query, QueryCreatePayload, QueryUpdatePayload};

const QUERIES_PATH: &str = "/api/queries";

fn query_path(id: i64) -> String {
    format!("{QUERIES_PATH}/{id}")
}

/// List saved queries, one page at a time.
pub async fn list_queries(
    transport: &Transport,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Result<Page<Query>> {
    let mut params = Vec::new();
    if let Some(p) = page {
        params.push(("page", p.to_string()));
    }
    if let Some(s) = page_size {
        params.push(("page_size", s.to_string()));
    }

    let response = transport.get(QUERIES_PATH, &params).await?;
    decode(response, QUERIES_PATH).await
}

pub async fn get_query(transport: &Transport, id: i64) -> Result<Query> {
    let path = query_path(id);
    let response = transport.get(&path, &[]).await?;
    decode(response, &path).await
}

pub async fn create_query(transport: &Transport, payload: &QueryCreatePayload) -> Result<Query> {
    let body = encode_body(payload)?;
    let response = transport.post(QUERIES_PATH, body, &[]).await?;
    decode(response, QUERIES_PATH).await
}

pub async fn update_query(
    transport: &Transport,
    id: i64,
    payload: &QueryUpdatePayload,
) -> Result<Query> {
    let path = query_path(id);
    let body = encode_body(payload)?;
    let response = transport.post(&path, body, &[]).await?;
    decode(response, &path).await
}

/// Archive a query. Redash keeps archived queries but hides them from lists.
pub async fn archive_query(transport: &Transport, id: i64) -> Result<()> {
    transport.delete(&query_path(id), &[]).await?;
    Ok(())
}
