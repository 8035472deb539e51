// crates/social-api-assert/src/fields.rs
// ============================================================================
// Module: Field Assertions
// Description: Field-by-field comparison of resources and payloads.
// Purpose: Name the first field that differs between two representations.
// Dependencies: serde, serde_json, social-api-core
// ============================================================================

//! ## Overview
//! The expected side is anything serializable (a decoded response body or a
//! typed record); the actual side exposes its wire fields through
//! [`FieldSet`]. The `id` is compared only when the actual side carries one,
//! so a created record can be checked against the payload that produced it.

use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;
use social_api_core::FieldSet;
use social_api_core::Post;
use social_api_core::PostCreate;
use social_api_core::PostUpdate;
use social_api_core::Resource;
use social_api_core::User;
use social_api_core::UserCreate;
use social_api_core::UserUpdate;

use crate::error::AssertionError;
use crate::expect::expect_field;

/// Wire name of the identifier field.
const ID_FIELD: &str = "id";

// ============================================================================
// SECTION: Comparable Representations
// ============================================================================

/// Representations of resource `R` that may be compared against it.
pub trait Comparable<R: Resource>: FieldSet {}

impl Comparable<User> for User {}
impl Comparable<User> for UserCreate {}
impl Comparable<User> for UserUpdate {}
impl Comparable<Post> for Post {}
impl Comparable<Post> for PostCreate {}
impl Comparable<Post> for PostUpdate {}

// ============================================================================
// SECTION: Resource Comparison
// ============================================================================

/// Compares `expected` against the wire fields of `actual`.
///
/// # Errors
///
/// Returns [`AssertionError::FieldMismatch`] for the first differing field
/// and [`AssertionError::Body`] when `expected` does not serialize.
pub fn assert_fields<R, E, A>(expected: &E, actual: &A) -> Result<(), AssertionError>
where
    R: Resource,
    E: Serialize + ?Sized,
    A: Comparable<R> + ?Sized,
{
    let expected = serde_json::to_value(expected).map_err(|err| AssertionError::Body(err.to_string()))?;
    if let Some(id) = actual.identifier() {
        expect_field(ID_FIELD, field_of(&expected, ID_FIELD)).to_be_equal(&Value::from(id))?;
    }
    for (name, value) in actual.fields() {
        expect_field(name, field_of(&expected, name)).to_be_equal(&value)?;
    }
    Ok(())
}

/// Compares a user body against a user record or payload.
///
/// # Errors
///
/// See [`assert_fields`].
pub fn assert_user<E, A>(expected: &E, actual: &A) -> Result<(), AssertionError>
where
    E: Serialize + ?Sized,
    A: Comparable<User> + ?Sized,
{
    assert_fields::<User, E, A>(expected, actual)
}

/// Compares a post body against a post record or payload.
///
/// # Errors
///
/// See [`assert_fields`].
pub fn assert_post<E, A>(expected: &E, actual: &A) -> Result<(), AssertionError>
where
    E: Serialize + ?Sized,
    A: Comparable<Post> + ?Sized,
{
    assert_fields::<Post, E, A>(expected, actual)
}

// ============================================================================
// SECTION: Collections
// ============================================================================

/// Checks two collections for equal length, then position-wise equality.
///
/// # Errors
///
/// Returns [`AssertionError::LengthMismatch`] or
/// [`AssertionError::CollectionMismatch`].
pub fn assert_collection<T: PartialEq + Debug>(expected: &[T], actual: &[T]) -> Result<(), AssertionError> {
    if expected.len() != actual.len() {
        return Err(AssertionError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    if expected.iter().zip(actual).all(|(left, right)| left == right) {
        Ok(())
    } else {
        Err(AssertionError::CollectionMismatch)
    }
}

/// Reads a top-level field, treating absence as `null`.
fn field_of(body: &Value, name: &str) -> Value {
    body.get(name).cloned().unwrap_or(Value::Null)
}
