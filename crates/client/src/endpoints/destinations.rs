//! Destination endpoints.
//!
//! These functions send what they are given. Schema validation happens one
//! layer up, in [`crate::RedashClient::create_destination`] and
//! [`crate::RedashClient::update_destination`].

use crate::endpoints::request::{Transport, decode, encode_body};
use crate::error::Result;
use crate::models::{Destination, DestinationType};

const DESTINATIONS_PATH: &str = "/api/destinations";
const DESTINATION_TYPES_PATH: &str = "/api/destinations/types";
/// Redash serves destination deletes under the singular resource name.
const DESTINATION_DELETE_PATH: &str = "/api/destination";

fn destination_path(id: i64) -> String {
    format!("{DESTINATIONS_PATH}/{id}")
}

pub async fn list_destinations(transport: &Transport) -> Result<Vec<Destination>> {
    let response = transport.get(DESTINATIONS_PATH, &[]).await?;
    decode(response, DESTINATIONS_PATH).await
}

pub async fn get_destination(transport: &Transport, id: i64) -> Result<Destination> {
    let path = destination_path(id);
    let response = transport.get(&path, &[]).await?;
    decode(response, &path).await
}

/// Fetch every registered destination type with its configuration schema.
pub async fn list_destination_types(transport: &Transport) -> Result<Vec<DestinationType>> {
    let response = transport.get(DESTINATION_TYPES_PATH, &[]).await?;
    decode(response, DESTINATION_TYPES_PATH).await
}

pub async fn create_destination(
    transport: &Transport,
    destination: &Destination,
) -> Result<Destination> {
    let body = encode_body(destination)?;
    let response = transport.post(DESTINATIONS_PATH, body, &[]).await?;
    decode(response, DESTINATIONS_PATH).await
}

pub async fn update_destination(
    transport: &Transport,
    id: i64,
    destination: &Destination,
) -> Result<Destination> {
    let path = destination_path(id);
    let body = encode_body(destination)?;
    let response = transport.post(&path, body, &[]).await?;
    decode(response, &path).await
}

pub async fn delete_destination(transport: &Transport, id: i64) -> Result<()> {
    let path = format!("{DESTINATION_DELETE_PATH}/{id}");
    transport.delete(&path, &[]).await?;
    Ok(())
}
