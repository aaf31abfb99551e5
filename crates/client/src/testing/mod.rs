//! Testing utilities for Redash client tests.
//!
//! This module provides helper functions for loading test fixtures and
//! building destination-type schemas. Available when running tests or when
//! the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use redash_client::testing::{destination_type, load_fixture};
//!
//! let dashboard = load_fixture("dashboards/get_dashboard.json");
//! let email = destination_type("email", &["addresses"], &[("addresses", "string")]);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::models::{DestinationType, DestinationTypeSchema, PropertyField};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "queries/get_query.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Build a destination type whose schema declares `properties` as
/// `(name, schema type)` pairs and requires `required`.
pub fn destination_type(
    type_: &str,
    required: &[&str],
    properties: &[(&str, &str)],
) -> DestinationType {
    let properties: BTreeMap<String, PropertyField> = properties
        .iter()
        .map(|(name, kind)| {
            (
                name.to_string(),
                PropertyField {
                    type_: kind.to_string(),
                    title: Some(name.to_string()),
                    default: None,
                },
            )
        })
        .collect();

    DestinationType {
        name: type_.to_string(),
        type_: type_.to_string(),
        icon: String::new(),
        configuration_schema: DestinationTypeSchema {
            secret: Vec::new(),
            required: required.iter().map(|s| s.to_string()).collect(),
            type_: "object".to_string(),
            order: properties.keys().cloned().collect(),
            properties,
        },
    }
}
