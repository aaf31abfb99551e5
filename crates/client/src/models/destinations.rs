//! Destination models for the Redash destinations API.
//!
//! # What this module handles:
//! - Destinations (alert notification targets) and their free-form options
//! - The closed set of scalar option values a destination may carry
//! - Destination type descriptors with their configuration schema
//!
//! # What this module does NOT handle:
//! - Checking options against a schema (see [`crate::validation`])
//!
//! Invariants:
//! - Options are kept in a `BTreeMap`, so iteration is in key order.
//! - Any option JSON value that is not a bool, a signed 64-bit integer or a
//!   string decodes as [`OptionValue::Unsupported`] and never passes validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::serde_helpers::null_as_default;

/// A notification target such as an e-mail address or a chat webhook.
///
/// Used both as the record returned by the API and as the create/update body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Destination {
    /// Assigned by the service. Never sent; updates address the id in the path.
    #[serde(skip_serializing)]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, OptionValue>,
}

impl Destination {
    /// Create a destination of the given type with no options.
    pub fn new(name: impl Into<String>, type_: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_: type_.into(),
            ..Default::default()
        }
    }

    /// Builder-style option setter.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// A single destination option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    String(String),
    /// Floats, nulls, arrays, objects and out-of-range integers.
    Unsupported(serde_json::Value),
}

impl OptionValue {
    /// Schema type name this value satisfies, if any.
    pub fn schema_type(&self) -> Option<&'static str> {
        match self {
            Self::Boolean(_) => Some("boolean"),
            Self::Integer(_) => Some("number"),
            Self::String(_) => Some("string"),
            Self::Unsupported(_) => None,
        }
    }

    /// Human-readable name of the runtime kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Unsupported(value) => match value {
                serde_json::Value::Null => "null",
                serde_json::Value::Number(n) if n.is_f64() => "float",
                serde_json::Value::Number(_) => "unsigned integer",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Object(_) => "object",
                serde_json::Value::Bool(_) => "boolean",
                serde_json::Value::String(_) => "string",
            },
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Unsupported(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(Self::Unsupported(value))
    }
}

/// A destination kind registered with the service, from `/api/destinations/types`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationType {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub icon: String,
    pub configuration_schema: DestinationTypeSchema,
}

/// JSON-schema-like description of the options a destination type accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationTypeSchema {
    /// Option names the service treats as secrets.
    #[serde(deserialize_with = "null_as_default")]
    pub secret: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub required: Vec<String>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: BTreeMap<String, PropertyField>,
}

impl DestinationTypeSchema {
    pub fn property(&self, name: &str) -> Option<&PropertyField> {
        self.properties.get(name)
    }
}

/// Declared type of one destination option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyField {
    /// `number`, `string` or `boolean`.
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}
