// crates/social-api-core/src/error.rs
// ============================================================================
// Module: Model Errors
// Description: Error taxonomy for record construction and parsing.
// Purpose: Distinguish invalid payload fields from malformed responses.
// Dependencies: thiserror
// ============================================================================

//! Model construction and parsing errors.

use thiserror::Error;

/// Errors raised while building or parsing resource records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A response body could not be parsed into the typed record.
    #[error("{resource} body does not match its model: {message}")]
    SchemaMismatch {
        /// Resource label (`user`, `post`, ...).
        resource: &'static str,
        /// Deserializer message naming the missing or mistyped field.
        message: String,
    },
    /// A payload field failed construction-time validation.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Wire name of the rejected field.
        field: &'static str,
        /// Human-readable rejection reason.
        reason: String,
    },
    /// Neither an auth token nor a credential pair was supplied.
    #[error("provide either an auth token or a user email and password")]
    MissingCredentials,
}
