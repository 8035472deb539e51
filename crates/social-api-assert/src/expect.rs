// crates/social-api-assert/src/expect.rs
// ============================================================================
// Module: Expectations
// Description: Fluent equality checks that report the field they guard.
// Purpose: Building block for field-by-field resource comparison.
// Dependencies: serde, serde_json
// ============================================================================

//! Fluent equality helper: `expect(actual).to_be_equal(&other)`.

use serde::Serialize;
use serde_json::Value;

use crate::error::AssertionError;

/// Label used when an expectation is not tied to a named field.
const UNNAMED_FIELD: &str = "value";

/// A pending check on one expected value.
#[derive(Debug, Clone)]
pub struct Expectation<'a, T> {
    /// Field being checked.
    field: &'a str,
    /// Expected value.
    expected: T,
}

/// Starts an expectation on an unnamed value.
#[must_use]
pub const fn expect<T>(expected: T) -> Expectation<'static, T> {
    Expectation {
        field: UNNAMED_FIELD,
        expected,
    }
}

/// Starts an expectation on a named field.
#[must_use]
pub const fn expect_field<T>(field: &str, expected: T) -> Expectation<'_, T> {
    Expectation {
        field,
        expected,
    }
}

impl<T: PartialEq + Serialize> Expectation<'_, T> {
    /// Passes when `actual` equals the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::FieldMismatch`] carrying both values.
    pub fn to_be_equal(&self, actual: &T) -> Result<(), AssertionError> {
        if self.expected == *actual {
            return Ok(());
        }
        Err(AssertionError::FieldMismatch {
            field: self.field.to_string(),
            expected: to_json(&self.expected),
            actual: to_json(actual),
        })
    }
}

/// Renders a compared value for the failure report.
fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
