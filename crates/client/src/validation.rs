//! Destination option validation against a destination-type schema.
//!
//! Responsibilities:
//! - Select the schema for a destination's `type` from the fetched type list.
//! - Reject destinations missing a required option.
//! - Reject (strict) or prune (lenient) options the schema does not declare.
//! - Reject option values whose runtime kind disagrees with the declared type.
//!
//! Does NOT handle:
//! - Fetching destination types (see [`crate::RedashClient::sanitize_destination_options`]).
//!
//! Invariants:
//! - A destination type with no matching schema passes through untouched.
//! - Required options are checked in schema order, then options are visited in
//!   key order; the first failure is returned.
//! - Type mismatches fail regardless of strictness.
//! - In lenient mode every undeclared option is removed from the destination,
//!   even when a later option fails the type check.

use redash_config::Strictness;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::models::{Destination, DestinationType, DestinationTypeSchema, OptionValue, PropertyField};

/// Validate `destination.options` against the schema for `destination.type_`.
///
/// In [`Strictness::Lenient`] mode unknown options are removed from
/// `destination` in place.
pub fn validate_destination_options(
    destination: &mut Destination,
    types: &[DestinationType],
    strictness: Strictness,
) -> Result<(), ValidationError> {
    let Some(destination_type) = types.iter().find(|t| t.type_ == destination.type_) else {
        debug!(
            destination_type = %destination.type_,
            "No schema registered for destination type, skipping option validation"
        );
        return Ok(());
    };
    let schema = &destination_type.configuration_schema;

    check_required(destination, schema)?;

    let mut unknown = Vec::new();
    let outcome = check_options(destination, schema, strictness, &mut unknown);

    for key in unknown {
        warn!(
            field = %key,
            destination_type = %destination.type_,
            "Removing option not declared by destination type"
        );
        destination.options.remove(&key);
    }
    outcome?;

    debug!(
        destination_type = %destination.type_,
        options = destination.options.len(),
        "Destination options validated"
    );
    Ok(())
}

fn check_required(
    destination: &Destination,
    schema: &DestinationTypeSchema,
) -> Result<(), ValidationError> {
    match schema
        .required
        .iter()
        .find(|field| !destination.options.contains_key(field.as_str()))
    {
        Some(field) => Err(ValidationError::MissingRequired {
            field: field.clone(),
            destination_type: destination.type_.clone(),
        }),
        None => Ok(()),
    }
}

fn check_options(
    destination: &Destination,
    schema: &DestinationTypeSchema,
    strictness: Strictness,
    unknown: &mut Vec<String>,
) -> Result<(), ValidationError> {
    for (key, value) in &destination.options {
        match schema.property(key) {
            Some(property) => check_type(key, value, property)?,
            None if strictness.is_strict() => {
                return Err(ValidationError::UnknownField {
                    field: key.clone(),
                    destination_type: destination.type_.clone(),
                });
            }
            None => unknown.push(key.clone()),
        }
    }
    Ok(())
}

fn check_type(key: &str, value: &OptionValue, property: &PropertyField) -> Result<(), ValidationError> {
    match value.schema_type() {
        Some(kind) if kind == property.type_ => Ok(()),
        _ => Err(ValidationError::TypeMismatch {
            field: key.to_string(),
            expected: property.type_.clone(),
            actual: value.kind_name(),
        }),
    }
}
