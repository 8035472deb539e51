// crates/social-api-core/src/model/validate.rs
// ============================================================================
// Module: Field Validation
// Description: Construction-time checks for payload fields.
// Purpose: Reject invalid names, emails, and references before a request.
// Dependencies: regex
// ============================================================================

//! Field rules shared by the user and post payloads.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ModelError;

/// Loose syntactic email check: one `@`, no whitespace, dotted domain.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").ok());

/// Rejects empty or overlong text.
pub(super) fn non_empty(field: &'static str, value: &str, max: Option<usize>) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if let Some(max) = max {
        let length = value.chars().count();
        if length > max {
            return Err(ModelError::InvalidField {
                field,
                reason: format!("must be at most {max} characters, got {length}"),
            });
        }
    }
    Ok(())
}

/// Rejects syntactically invalid email addresses.
pub(super) fn email(field: &'static str, value: &str) -> Result<(), ModelError> {
    let valid = EMAIL_PATTERN.as_ref().is_some_and(|pattern| pattern.is_match(value));
    if valid {
        Ok(())
    } else {
        Err(ModelError::InvalidField {
            field,
            reason: format!("`{value}` is not a valid email address"),
        })
    }
}

/// Rejects identifiers that cannot reference a server-assigned record.
pub(super) fn positive_id(field: &'static str, value: i64) -> Result<(), ModelError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ModelError::InvalidField {
            field,
            reason: format!("must be a positive identifier, got {value}"),
        })
    }
}
