//! Common types shared across Redash API models.
//!
//! This module contains generic wrappers and shared types used by multiple
//! resource modules. It does NOT contain resource-specific models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// A Redash user as embedded in queries, dashboards, alerts and snippets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub groups: Vec<i64>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub is_disabled: bool,
    pub active_at: Option<DateTime<Utc>>,
    pub is_invitation_pending: bool,
    pub is_email_verified: bool,
    pub auth_type: Option<String>,
}

/// Paginated list envelope used by `/api/queries` and `/api/dashboards`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            page: 0,
            page_size: 0,
            results: Vec::new(),
        }
    }
}

/// Error body returned by Redash on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
