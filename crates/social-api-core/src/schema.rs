// crates/social-api-core/src/schema.rs
// ============================================================================
// Module: Resource Schemas
// Description: JSON schema builders for Users, Posts, and service messages.
// Purpose: Structural contracts used to validate response bodies.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Item and list schemas are structural only: required keys and JSON types.
//! Value rules (name length, email syntax, author references) live in the
//! payload constructors and in field assertions. Create and update schemas
//! additionally carry the payload constraints so request bodies can be
//! checked the same way.

use serde_json::Value;
use serde_json::json;

use crate::model::MAX_USER_NAME_LENGTH;

/// Dialect declared by every schema.
const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Text must contain at least one non-whitespace character.
const NON_BLANK_PATTERN: &str = "\\S";

/// Returns the schema for a single user body.
#[must_use]
pub fn user_schema() -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "title": "User",
        "type": "object",
        "required": ["id", "name", "email"],
        "properties": {
            "id": { "type": "integer" },
            "name": { "type": "string" },
            "email": { "type": "string" }
        }
    })
}

/// Returns the schema for a user collection body.
#[must_use]
pub fn user_list_schema() -> Value {
    list_schema("UserList", user_schema())
}

/// Returns the schema for a `POST /users` body.
#[must_use]
pub fn user_create_schema() -> Value {
    user_payload_schema("UserCreate")
}

/// Returns the schema for a `PUT /users/{id}` body.
#[must_use]
pub fn user_update_schema() -> Value {
    user_payload_schema("UserUpdate")
}

/// Returns the schema for a single post body.
#[must_use]
pub fn post_schema() -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "title": "Post",
        "type": "object",
        "required": ["id", "title", "content", "user_id"],
        "properties": {
            "id": { "type": "integer" },
            "title": { "type": "string" },
            "content": { "type": "string" },
            "user_id": { "type": "integer" }
        }
    })
}

/// Returns the schema for a post collection body.
#[must_use]
pub fn post_list_schema() -> Value {
    list_schema("PostList", post_schema())
}

/// Returns the schema for a `POST /posts` body.
#[must_use]
pub fn post_create_schema() -> Value {
    post_payload_schema("PostCreate")
}

/// Returns the schema for a `PUT /posts/{id}` body.
#[must_use]
pub fn post_update_schema() -> Value {
    post_payload_schema("PostUpdate")
}

/// Returns the schema for `{"error": "..."}` bodies.
#[must_use]
pub fn error_body_schema() -> Value {
    single_string_schema("ErrorBody", "error")
}

/// Returns the schema for `{"message": "..."}` bodies.
#[must_use]
pub fn message_body_schema() -> Value {
    single_string_schema("MessageBody", "message")
}

/// Wraps an item schema into an array schema.
fn list_schema(title: &str, item: Value) -> Value {
    let mut item = item;
    if let Some(map) = item.as_object_mut() {
        map.remove("$schema");
    }
    json!({
        "$schema": SCHEMA_DIALECT,
        "title": title,
        "type": "array",
        "items": item
    })
}

/// Request body schema for user payloads.
fn user_payload_schema(title: &str) -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "title": title,
        "type": "object",
        "required": ["name", "email"],
        "properties": {
            "name": {
                "type": "string",
                "pattern": NON_BLANK_PATTERN,
                "maxLength": MAX_USER_NAME_LENGTH
            },
            "email": {
                "type": "string",
                "pattern": "^[^@\\s]+@[^@\\s]+\\.[^@\\s.]+$"
            }
        }
    })
}

/// Request body schema for post payloads.
fn post_payload_schema(title: &str) -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "title": title,
        "type": "object",
        "required": ["title", "content", "user_id"],
        "properties": {
            "title": { "type": "string", "pattern": NON_BLANK_PATTERN },
            "content": { "type": "string" },
            "user_id": { "type": "integer", "minimum": 1 }
        }
    })
}

/// Object requiring one string property.
fn single_string_schema(title: &str, key: &str) -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "title": title,
        "type": "object",
        "required": [key],
        "properties": {
            key: { "type": "string" }
        }
    })
}
