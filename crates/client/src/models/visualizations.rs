//! Visualization models for the Redash visualizations API.
//!
//! # What this module handles:
//! - Visualization records embedded in queries and widgets
//! - Chart options with the camelCase keys Redash stores them under
//! - Create/update payloads
//!
//! # What this module does NOT handle:
//! - Rendering or interpreting chart options
//!
//! Options keys this module does not model (table columns, counter settings and
//! the like) are kept in [`VisualizationOptions::extra`] so that a record read
//! and written back does not lose them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::queries::Query;
use crate::serde_helpers::{is_false, is_zero, null_as_default};

/// A visualization attached to a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visualization {
    pub id: i64,
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub options: VisualizationOptions,
    /// Present when the visualization is embedded in a dashboard widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Box<Query>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationOptions {
    #[serde(rename = "xAxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<VisualizationAxisOptions>,
    #[serde(
        rename = "yAxis",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub y_axis: Vec<VisualizationAxisOptions>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub series: BTreeMap<String, serde_json::Value>,
    #[serde(rename = "globalSeriesType", skip_serializing_if = "String::is_empty")]
    pub global_series_type: String,
    #[serde(rename = "sortX", skip_serializing_if = "is_false")]
    pub sort_x: bool,
    #[serde(
        rename = "seriesOptions",
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub series_options: BTreeMap<String, SeriesOptions>,
    #[serde(
        rename = "columnMapping",
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub column_mapping: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<VisualizationLegendOptions>,
    /// Any other options keys, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    #[serde(rename = "zIndex")]
    pub z_index: i64,
    pub index: i64,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(rename = "yAxis")]
    pub y_axis: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationLegendOptions {
    pub enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub placement: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationAxisOptions {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_false")]
    pub opposite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<VisualizationLabelOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationLabelOptions {
    pub enabled: bool,
}

/// Payload for `POST /api/visualizations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationCreatePayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub query_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub options: VisualizationOptions,
}

/// Payload for `POST /api/visualizations/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationUpdatePayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub options: VisualizationOptions,
}
