//! Query snippet models for the Redash query snippets API.
//!
//! A snippet is a reusable piece of SQL inserted in the editor when its
//! trigger word is typed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;
use crate::serde_helpers::is_zero;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySnippet {
    pub id: i64,
    pub trigger: String,
    pub snippet: String,
    pub description: String,
    pub user: Option<User>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/query_snippets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateQuerySnippetPayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trigger: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snippet: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Payload for `POST /api/query_snippets/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateQuerySnippetPayload {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trigger: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snippet: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}
