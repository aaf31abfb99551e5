//! Query models for the Redash queries API.
//!
//! # What this module handles:
//! - Saved query records as returned by `/api/queries` and `/api/queries/{id}`
//! - Schedules and parameter definitions embedded in query options
//! - Create/update payloads with "omit if empty" serialization
//!
//! # What this module does NOT handle:
//! - Executing queries or fetching query results
//! - Direct HTTP API calls (see [`crate::endpoints::queries`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;
use super::visualizations::Visualization;
use crate::serde_helpers::{is_false, is_zero, null_as_default};

/// A saved Redash query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub query: String,
    pub query_hash: Option<String>,
    pub version: i64,
    pub schedule: Option<QuerySchedule>,
    pub api_key: Option<String>,
    pub is_archived: bool,
    pub is_draft: bool,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub retrieved_at: Option<DateTime<Utc>>,
    pub data_source_id: Option<i64>,
    pub latest_query_data_id: Option<i64>,
    pub last_modified_by_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub is_safe: bool,
    pub user: Option<User>,
    pub last_modified_by: Option<User>,
    pub is_favorite: bool,
    pub can_edit: bool,
    pub runtime: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub options: QueryOptions,
    #[serde(deserialize_with = "null_as_default")]
    pub visualizations: Vec<Visualization>,
}

impl Query {
    /// Take the visualization with the given id, if this query has one.
    pub fn into_visualization(self, visualization_id: i64) -> Option<Visualization> {
        self.visualizations
            .into_iter()
            .find(|v| v.id == visualization_id)
    }
}

/// Refresh schedule of a query. Redash sends `null` for unscheduled queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySchedule {
    /// Refresh interval in seconds.
    pub interval: Option<i64>,
    pub time: Option<String>,
    pub day_of_week: Option<String>,
    pub until: Option<String>,
}

/// Options attached to a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: Vec<QueryOptionsParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_auto_limit: Option<bool>,
}

/// A single query parameter definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptionsParameter {
    pub title: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_options: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub locals: Vec<serde_json::Value>,
    pub value: serde_json::Value,
}

/// Payload for `POST /api/queries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryCreatePayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub data_source_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Payload for `POST /api/queries/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryUpdatePayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub data_source_id: i64,
    #[serde(skip_serializing_if = "is_false")]
    pub is_draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<QueryOptions>,
    #[serde(skip_serializing_if = "is_zero")]
    pub version: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
