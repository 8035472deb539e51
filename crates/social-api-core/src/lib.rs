// crates/social-api-core/src/lib.rs
// ============================================================================
// Module: Social API Core Library
// Description: Public API surface for the Social API resource model.
// Purpose: Expose typed records, routes, and schemas for Users and Posts.
// Dependencies: crate::{error, model, routes, schema}
// ============================================================================

//! ## Overview
//! `social-api-core` defines the typed records exchanged with the social
//! media REST service under test. Create and update payloads validate their
//! fields on construction, response records validate only shape, and every
//! record serializes with its wire field names.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod model;
pub mod routes;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ModelError;
pub use model::AuthUser;
pub use model::Authentication;
pub use model::Credentials;
pub use model::DEFAULT_POST_AUTHOR_ID;
pub use model::FieldSet;
pub use model::MAX_USER_NAME_LENGTH;
pub use model::Post;
pub use model::PostCreate;
pub use model::PostList;
pub use model::PostUpdate;
pub use model::Resource;
pub use model::ResourceKind;
pub use model::ResourceList;
pub use model::User;
pub use model::UserCreate;
pub use model::UserList;
pub use model::UserUpdate;
pub use model::parse_list;
pub use model::parse_resource;
pub use routes::ApiRoute;
