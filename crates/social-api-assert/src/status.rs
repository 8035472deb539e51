// crates/social-api-assert/src/status.rs
// ============================================================================
// Module: Status Assertions
// Description: Status code and message-body checks.
// Purpose: Compare declared and received statuses and service message bodies.
// Dependencies: serde_json, social-api-client
// ============================================================================

//! ## Overview
//! Status checks come first in every test; a mismatch carries the request
//! and the raw body so the failure reads without a rerun.

use serde_json::Map;
use serde_json::Value;
use social_api_client::RawResponse;
use social_api_client::StatusCode;

use crate::error::AssertionError;
use crate::expect::expect_field;

/// Checks that `response` carries the `expected` status.
///
/// # Errors
///
/// Returns [`AssertionError::UnexpectedStatus`] with the raw body attached.
pub fn assert_status(response: &RawResponse, expected: StatusCode) -> Result<(), AssertionError> {
    if response.status() == expected {
        return Ok(());
    }
    Err(AssertionError::UnexpectedStatus {
        expected: expected.as_u16(),
        actual: response.status().as_u16(),
        method: response.method().to_string(),
        url: response.url().to_string(),
        body: response.text().to_string(),
    })
}

/// Checks status and an `{"error": message}` body.
///
/// # Errors
///
/// Returns the status failure first, then a body mismatch on `error`.
pub fn assert_error_body(
    response: &RawResponse,
    expected: StatusCode,
    message: &str,
) -> Result<(), AssertionError> {
    assert_keyed_body(response, expected, "error", message)
}

/// Checks status and a `{"message": message}` body.
///
/// # Errors
///
/// Returns the status failure first, then a body mismatch on `message`.
pub fn assert_message_body(
    response: &RawResponse,
    expected: StatusCode,
    message: &str,
) -> Result<(), AssertionError> {
    assert_keyed_body(response, expected, "message", message)
}

/// Shared body check for the single-key message shapes.
fn assert_keyed_body(
    response: &RawResponse,
    expected: StatusCode,
    key: &str,
    message: &str,
) -> Result<(), AssertionError> {
    assert_status(response, expected)?;
    let body = response.json().map_err(|err| AssertionError::Body(err.to_string()))?;
    let mut expected_body = Map::new();
    expected_body.insert(key.to_string(), Value::from(message));
    expect_field(key, Value::Object(expected_body)).to_be_equal(&body)?;
    Ok(())
}

/// Returns the JSON body of a response that has already passed its status
/// check.
///
/// # Errors
///
/// Returns [`AssertionError::Body`] when the body is not JSON.
pub fn json_body(response: &RawResponse) -> Result<Value, AssertionError> {
    response.json().map_err(|err| AssertionError::Body(err.to_string()))
}
