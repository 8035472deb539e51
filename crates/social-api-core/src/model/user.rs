// crates/social-api-core/src/model/user.rs
// ============================================================================
// Module: User Records
// Description: User resource and its create/update payloads.
// Purpose: Typed user bodies with construction-time validation.
// Dependencies: serde, serde_json
// ============================================================================

//! User records and payloads.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use super::FieldSet;
use super::Resource;
use super::ResourceKind;
use super::ResourceList;
use super::random_suffix;
use super::validate;
use crate::error::ModelError;
use crate::schema;

/// Maximum number of characters in a user name.
pub const MAX_USER_NAME_LENGTH: usize = 50;

// ============================================================================
// SECTION: Resource
// ============================================================================

/// A user as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// Ordered user collection.
pub type UserList = ResourceList<User>;

impl FieldSet for User {
    fn identifier(&self) -> Option<i64> {
        Some(self.id)
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        user_fields(&self.name, &self.email)
    }
}

impl Resource for User {
    type Create = UserCreate;
    type Update = UserUpdate;

    const KIND: ResourceKind = ResourceKind::User;

    fn id(&self) -> i64 {
        self.id
    }

    fn generated_create() -> UserCreate {
        UserCreate::generated()
    }

    fn item_schema() -> Value {
        schema::user_schema()
    }

    fn list_schema() -> Value {
        schema::user_list_schema()
    }
}

// ============================================================================
// SECTION: Payloads
// ============================================================================

/// Wire shape shared by the user payloads before validation.
#[derive(Deserialize)]
struct UserFields {
    /// Raw name.
    name: String,
    /// Raw email.
    email: String,
}

/// Payload for `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserFields")]
pub struct UserCreate {
    /// Validated name.
    name: String,
    /// Validated email.
    email: String,
}

impl UserCreate {
    /// Builds a validated create payload.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] when the name is empty or longer
    /// than [`MAX_USER_NAME_LENGTH`], or the email is malformed.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ModelError> {
        let (name, email) = validate_user(name.into(), email.into())?;
        Ok(Self {
            name,
            email,
        })
    }

    /// Builds a payload with a random numeric suffix in name and email.
    #[must_use]
    pub fn generated() -> Self {
        let suffix = random_suffix();
        Self {
            name: format!("user_{suffix}"),
            email: format!("user_{suffix}@example.com"),
        }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl TryFrom<UserFields> for UserCreate {
    type Error = ModelError;

    fn try_from(raw: UserFields) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.email)
    }
}

impl FieldSet for UserCreate {
    fn identifier(&self) -> Option<i64> {
        None
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        user_fields(&self.name, &self.email)
    }
}

/// Payload for `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserFields")]
pub struct UserUpdate {
    /// Validated name.
    name: String,
    /// Validated email.
    email: String,
}

impl UserUpdate {
    /// Builds a validated update payload.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] under the same rules as
    /// [`UserCreate::new`].
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ModelError> {
        let (name, email) = validate_user(name.into(), email.into())?;
        Ok(Self {
            name,
            email,
        })
    }

    /// Builds a payload with a random numeric suffix in name and email.
    #[must_use]
    pub fn generated() -> Self {
        let suffix = random_suffix();
        Self {
            name: format!("updated_user_{suffix}"),
            email: format!("updated_{suffix}@example.com"),
        }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl TryFrom<UserFields> for UserUpdate {
    type Error = ModelError;

    fn try_from(raw: UserFields) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.email)
    }
}

impl FieldSet for UserUpdate {
    fn identifier(&self) -> Option<i64> {
        None
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        user_fields(&self.name, &self.email)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Applies the user payload rules shared by create and update.
fn validate_user(name: String, email: String) -> Result<(String, String), ModelError> {
    validate::non_empty("name", &name, Some(MAX_USER_NAME_LENGTH))?;
    validate::email("email", &email)?;
    Ok((name, email))
}

/// Lists the comparable user fields in wire order.
fn user_fields(name: &str, email: &str) -> Vec<(&'static str, Value)> {
    vec![("name", json!(name)), ("email", json!(email))]
}
