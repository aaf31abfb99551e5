//! Dashboard models for the Redash dashboards API.
//!
//! Dashboards are addressed by slug for reads and archives, and by numeric id
//! for updates. A fetched dashboard embeds its widgets, which is what the
//! scan-based widget lookup relies on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;
use super::widgets::Widget;
use crate::serde_helpers::null_as_default;

/// A Redash dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub user_id: Option<i64>,
    pub user: Option<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub layout: Vec<serde_json::Value>,
    pub dashboard_filters_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub widgets: Vec<Widget>,
    pub is_archived: bool,
    pub is_draft: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub version: i64,
    pub is_favorite: bool,
    pub can_edit: bool,
}

impl Dashboard {
    /// Take the embedded widget with the given id, if this dashboard has one.
    pub fn into_widget(self, widget_id: i64) -> Option<Widget> {
        self.widgets.into_iter().find(|w| w.id == widget_id)
    }
}

/// Payload for `POST /api/dashboards`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCreatePayload {
    pub name: String,
}

/// Payload for `POST /api/dashboards/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardUpdatePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_filters_enabled: Option<bool>,
}
