// crates/social-api-core/src/model/mod.rs
// ============================================================================
// Module: Resource Model
// Description: Typed records for Users, Posts, and authentication.
// Purpose: Shared traits that let clients, fixtures, and assertions stay generic.
// Dependencies: serde, serde_json, rand
// ============================================================================

//! ## Overview
//! Every resource exposes a full record (with the server-assigned `id`) plus
//! create and update payloads without it. [`Resource`] ties those types to a
//! route and schemas; [`FieldSet`] exposes the comparable wire fields so
//! responses can be checked against either a full record or a payload.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod auth;
mod post;
mod user;
mod validate;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ModelError;
use crate::routes::ApiRoute;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use auth::AuthUser;
pub use auth::Authentication;
pub use auth::Credentials;
pub use auth::DEMO_EMAIL;
pub use auth::DEMO_PASSWORD;
pub use post::DEFAULT_POST_AUTHOR_ID;
pub use post::Post;
pub use post::PostCreate;
pub use post::PostList;
pub use post::PostUpdate;
pub use user::MAX_USER_NAME_LENGTH;
pub use user::User;
pub use user::UserCreate;
pub use user::UserList;
pub use user::UserUpdate;

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Resource families exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// User accounts.
    User,
    /// Posts authored by users.
    Post,
}

impl ResourceKind {
    /// Lowercase label used in errors and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Post => "post",
        }
    }

    /// Capitalized name used in service messages (`User not found`).
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Post => "Post",
        }
    }

    /// Collection route for this resource.
    #[must_use]
    pub const fn route(self) -> ApiRoute {
        match self {
            Self::User => ApiRoute::Users,
            Self::Post => ApiRoute::Posts,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparable wire fields of a record.
pub trait FieldSet {
    /// Server-assigned identifier, when the record carries one.
    fn identifier(&self) -> Option<i64>;

    /// Non-identifier fields as `(wire_name, value)` pairs.
    fn fields(&self) -> Vec<(&'static str, Value)>;
}

/// A server-owned resource together with its payload types.
pub trait Resource:
    Serialize + DeserializeOwned + FieldSet + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Payload accepted by `POST {collection}`.
    type Create: Serialize + DeserializeOwned + FieldSet + Clone + fmt::Debug + Send + Sync;
    /// Payload accepted by `PUT {collection}/{id}`.
    type Update: Serialize + DeserializeOwned + FieldSet + Clone + fmt::Debug + Send + Sync;

    /// Resource family.
    const KIND: ResourceKind;

    /// Server-assigned identifier.
    fn id(&self) -> i64;

    /// Builds a create payload with randomized default values.
    fn generated_create() -> Self::Create;

    /// JSON schema for a single item body.
    fn item_schema() -> Value;

    /// JSON schema for a collection body.
    fn list_schema() -> Value;

    /// Parses a response body into the typed record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SchemaMismatch`] when required fields are
    /// missing or mistyped.
    fn from_json(body: &Value) -> Result<Self, ModelError> {
        parse_resource(body)
    }
}

// ============================================================================
// SECTION: Collections
// ============================================================================

/// Ordered collection of resources, serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceList<R>(pub Vec<R>);

impl<R> ResourceList<R> {
    /// Returns the items in response order.
    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.0
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a JSON body into a resource record.
///
/// # Errors
///
/// Returns [`ModelError::SchemaMismatch`] when the body does not deserialize.
pub fn parse_resource<R: Resource>(body: &Value) -> Result<R, ModelError> {
    R::deserialize(body).map_err(|err| ModelError::SchemaMismatch {
        resource: R::KIND.label(),
        message: err.to_string(),
    })
}

/// Parses a JSON array body into a resource collection.
///
/// # Errors
///
/// Returns [`ModelError::SchemaMismatch`] when the body is not an array of
/// well-formed records.
pub fn parse_list<R: Resource>(body: &Value) -> Result<ResourceList<R>, ModelError> {
    ResourceList::<R>::deserialize(body).map_err(|err| ModelError::SchemaMismatch {
        resource: R::KIND.label(),
        message: err.to_string(),
    })
}

/// Returns a random numeric suffix for generated names and emails.
pub(crate) fn random_suffix() -> u32 {
    rand::thread_rng().gen_range(100_000..10_000_000)
}
