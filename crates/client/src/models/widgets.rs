//! Widget models for the Redash widgets API.
//!
//! Widgets live on dashboards. Redash has no single-widget GET endpoint, so
//! widgets are read through their parent [`Dashboard`](super::Dashboard).
//! Text widgets carry no visualization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::visualizations::Visualization;
use crate::serde_helpers::{is_false, null_as_default};

/// A widget placed on a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Widget {
    pub id: i64,
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub options: WidgetOptions,
    pub dashboard_id: i64,
    pub text: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub visualization: Option<Visualization>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    #[serde(rename = "isHidden", alias = "is_hidden", skip_serializing_if = "is_false")]
    pub is_hidden: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub position: WidgetPosition,
    #[serde(
        rename = "parameterMappings",
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub parameter_mappings: BTreeMap<String, WidgetParameterMapping>,
}

/// Grid placement of a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetPosition {
    pub auto_height: bool,
    pub size_x: i64,
    pub size_y: i64,
    pub max_size_y: i64,
    pub max_size_x: i64,
    pub min_size_y: i64,
    pub min_size_x: i64,
    pub col: i64,
    pub row: i64,
}

/// Binding of a query parameter to a dashboard-level or widget-level value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetParameterMapping {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(rename = "mapTo")]
    pub map_to: String,
    pub value: serde_json::Value,
    pub title: String,
}

/// Payload for `POST /api/widgets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetCreatePayload {
    pub dashboard_id: i64,
    pub text: String,
    /// `None` creates a text widget.
    pub visualization_id: Option<i64>,
    pub width: i64,
    pub options: WidgetOptions,
}

/// Payload for `POST /api/widgets/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetUpdatePayload {
    pub text: String,
    pub width: i64,
    pub options: WidgetOptions,
}
