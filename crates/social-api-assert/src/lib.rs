// crates/social-api-assert/src/lib.rs
// ============================================================================
// Module: Social API Assertions Library
// Description: Response checks for the social media service test suite.
// Purpose: Separate status, schema, and field-value failures.
// Dependencies: crate::{error, expect, fields, schema, status}
// ============================================================================

//! ## Overview
//! Every check returns `Result<(), AssertionError>` so test bodies propagate
//! failures with `?`. Status, schema, and field failures are distinct
//! variants: a 200 with a malformed body reads differently from a 404, and
//! a schema-valid body with a wrong value names the field.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod expect;
pub mod fields;
pub mod schema;
pub mod status;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::AssertionError;
pub use error::SchemaViolation;
pub use expect::Expectation;
pub use expect::expect;
pub use expect::expect_field;
pub use fields::Comparable;
pub use fields::assert_collection;
pub use fields::assert_post;
pub use fields::assert_fields;
pub use fields::assert_user;
pub use schema::SchemaValidator;
pub use schema::validate_item;
pub use schema::validate_list;
pub use schema::validate_response;
pub use schema::validate_schema;
pub use status::assert_error_body;
pub use status::assert_message_body;
pub use status::assert_status;
pub use status::json_body;
