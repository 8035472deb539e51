// crates/social-api-assert/src/schema.rs
// ============================================================================
// Module: Schema Validation
// Description: JSON Schema checks over response bodies.
// Purpose: Report the first structural violation with its location.
// Dependencies: jsonschema, serde_json, social-api-core
// ============================================================================

//! ## Overview
//! Schemas are compiled against Draft 2020-12. Only the first violation is
//! reported; the remaining ones are usually consequences of it.

use jsonschema::Draft;
use jsonschema::ValidationError;
use jsonschema::Validator;
use jsonschema::error::TypeKind;
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;
use social_api_client::RawResponse;
use social_api_core::Resource;

use crate::error::AssertionError;
use crate::error::SchemaViolation;

/// Pointer rendered for violations at the document root.
const ROOT_POINTER: &str = "/";

// ============================================================================
// SECTION: Compiled Validator
// ============================================================================

/// A compiled schema that can check many instances.
pub struct SchemaValidator {
    /// Compiled validator.
    validator: Validator,
}

impl SchemaValidator {
    /// Compiles `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::InvalidSchema`] when the schema does not
    /// compile.
    pub fn new(schema: &Value) -> Result<Self, AssertionError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(schema)
            .map_err(|err| AssertionError::InvalidSchema(err.to_string()))?;
        Ok(Self {
            validator,
        })
    }

    /// Checks `instance` and reports the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaViolation`] found.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaViolation> {
        let Some(err) = self.validator.iter_errors(instance).next() else {
            return Ok(());
        };
        let path = err.instance_path.to_string();
        Err(SchemaViolation {
            path: if path.is_empty() { ROOT_POINTER.to_string() } else { path },
            message: err.to_string(),
            expected: expected_of(&err),
            actual_type: json_type(err.instance.as_ref()).to_string(),
        })
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Validates `instance` against `schema`.
///
/// # Errors
///
/// Returns [`AssertionError::InvalidSchema`] for a broken schema and
/// [`AssertionError::Schema`] for the first violation.
pub fn validate_schema(instance: &Value, schema: &Value) -> Result<(), AssertionError> {
    SchemaValidator::new(schema)?.validate(instance)?;
    Ok(())
}

/// Validates a single resource body.
///
/// # Errors
///
/// See [`validate_schema`].
pub fn validate_item<R: Resource>(instance: &Value) -> Result<(), AssertionError> {
    validate_schema(instance, &R::item_schema())
}

/// Validates a collection body.
///
/// # Errors
///
/// See [`validate_schema`].
pub fn validate_list<R: Resource>(instance: &Value) -> Result<(), AssertionError> {
    validate_schema(instance, &R::list_schema())
}

/// Decodes a response body and validates it, returning the decoded JSON.
///
/// # Errors
///
/// Returns [`AssertionError::Body`] when the body is not JSON, otherwise
/// see [`validate_schema`].
pub fn validate_response(response: &RawResponse, schema: &Value) -> Result<Value, AssertionError> {
    let body = response.json().map_err(|err| AssertionError::Body(err.to_string()))?;
    validate_schema(&body, schema)?;
    Ok(body)
}

/// Describes what the failing keyword required.
fn expected_of(err: &ValidationError<'_>) -> String {
    match &err.kind {
        ValidationErrorKind::Type {
            kind: TypeKind::Single(expected),
        } => expected.to_string(),
        ValidationErrorKind::Type {
            kind: TypeKind::Multiple(types),
        } => types.iter().map(|kind| kind.to_string()).collect::<Vec<_>>().join(" or "),
        ValidationErrorKind::Required {
            property,
        } => format!("required property {property}"),
        _ => {
            let keyword_path = err.schema_path.to_string();
            let keyword = keyword_path.rsplit('/').next().unwrap_or_default();
            format!("{keyword} constraint")
        }
    }
}

/// Names the JSON type of a value the way schemas do.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_i64() || number.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
