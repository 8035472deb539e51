// crates/social-api-assert/src/error.rs
// ============================================================================
// Module: Assertion Errors
// Description: Failure taxonomy for response checks.
// Purpose: Carry enough context (codes, paths, values) to diagnose a failure.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Every check returns [`AssertionError`]; the variant tells a status
//! mismatch from a schema violation from a field mismatch.

use serde_json::Value;
use thiserror::Error;

/// Structural mismatch between a body and its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema violation at `{path}`: expected {expected}, found {actual_type} ({message})")]
pub struct SchemaViolation {
    /// JSON pointer of the offending value (`/` for the root).
    pub path: String,
    /// Validator message describing the expected shape.
    pub message: String,
    /// What the failing keyword required: a JSON type for `type`, the
    /// property for `required`, otherwise the keyword name.
    pub expected: String,
    /// JSON type actually found at `path`.
    pub actual_type: String,
}

/// A failed response check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionError {
    /// The response status differs from the declared expectation.
    #[error(
        "expected status code {expected}, but {method} {url} returned {actual}, response body:\n{body}"
    )]
    UnexpectedStatus {
        /// Declared status.
        expected: u16,
        /// Received status.
        actual: u16,
        /// Request method.
        method: String,
        /// Request URL.
        url: String,
        /// Raw response body.
        body: String,
    },
    /// The body does not conform to its schema.
    #[error(transparent)]
    Schema(#[from] SchemaViolation),
    /// The schema itself does not compile.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// The body is not JSON or could not be converted to JSON.
    #[error("response body is not valid json: {0}")]
    Body(String),
    /// A schema-valid body carries a different field value.
    #[error("field `{field}` mismatch: expected {expected}, got {actual}")]
    FieldMismatch {
        /// Wire name of the field.
        field: String,
        /// Value on the expected side.
        expected: Value,
        /// Value on the actual side.
        actual: Value,
    },
    /// Two collections differ in length.
    #[error("collection length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// Two equally long collections differ in at least one position.
    #[error("collections are not equal position by position")]
    CollectionMismatch,
}
