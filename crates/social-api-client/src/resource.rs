// crates/social-api-client/src/resource.rs
// ============================================================================
// Module: Resource Clients
// Description: Typed Users and Posts clients over any `HttpApi`.
// Purpose: Build payloads from models and hit collection/item routes.
// Dependencies: serde_json, tracing, social-api-core
// ============================================================================

//! ## Overview
//! One generic client serves every resource: the [`Resource`] impl supplies
//! the route, payload types, and default payload. All operations return the
//! raw response except [`ResourceClient::create_with_defaults`], which parses
//! the created record and fails hard on a malformed body so fixture setup
//! aborts instead of propagating a bad resource.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;
use social_api_core::ModelError;
use social_api_core::Post;
use social_api_core::Resource;
use social_api_core::User;
use tracing::debug;

use crate::error::ClientError;
use crate::http::HttpApi;
use crate::response::RawResponse;

/// Users client.
pub type UsersClient<A> = ResourceClient<User, A>;
/// Posts client.
pub type PostsClient<A> = ResourceClient<Post, A>;

/// Typed client for one resource family.
pub struct ResourceClient<R, A> {
    /// Transport or fake backing this client.
    api: A,
    /// Resource marker.
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource, A: HttpApi> ResourceClient<R, A> {
    /// Wraps an [`HttpApi`] implementation.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self {
            api,
            resource: PhantomData,
        }
    }

    /// Returns the underlying API.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// `GET {collection}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    pub fn list(&self) -> Result<RawResponse, ClientError> {
        self.api.get(R::KIND.route().as_str())
    }

    /// `GET {collection}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    pub fn get(&self, id: i64) -> Result<RawResponse, ClientError> {
        self.api.get(&R::KIND.route().item(id))
    }

    /// `POST {collection}` with a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if the payload does not serialize and
    /// [`ClientError::Transport`] on network failure.
    pub fn create(&self, payload: &R::Create) -> Result<RawResponse, ClientError> {
        self.create_raw(&encode(payload)?)
    }

    /// `POST {collection}` with an arbitrary body, for negative scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    pub fn create_raw(&self, body: &Value) -> Result<RawResponse, ClientError> {
        self.api.post(R::KIND.route().as_str(), body)
    }

    /// `PUT {collection}/{id}` with a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if the payload does not serialize and
    /// [`ClientError::Transport`] on network failure.
    pub fn update(&self, id: i64, payload: &R::Update) -> Result<RawResponse, ClientError> {
        self.update_raw(id, &encode(payload)?)
    }

    /// `PUT {collection}/{id}` with an arbitrary body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    pub fn update_raw(&self, id: i64, body: &Value) -> Result<RawResponse, ClientError> {
        self.api.put(&R::KIND.route().item(id), body)
    }

    /// `DELETE {collection}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    pub fn delete(&self, id: i64) -> Result<RawResponse, ClientError> {
        self.api.delete(&R::KIND.route().item(id))
    }

    /// Creates a resource from a generated payload and parses the result.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Schema`] when the response body is not JSON or
    /// does not parse into `R`, and [`ClientError::Transport`] on network
    /// failure.
    pub fn create_with_defaults(&self) -> Result<R, ClientError> {
        self.create_parsed(&R::generated_create())
    }

    /// Creates a resource from `payload` and parses the result.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_with_defaults`].
    pub fn create_parsed(&self, payload: &R::Create) -> Result<R, ClientError> {
        let response = self.create(payload)?;
        let body = response.json().map_err(|err| ModelError::SchemaMismatch {
            resource: R::KIND.label(),
            message: err.to_string(),
        })?;
        let resource = R::from_json(&body)?;
        debug!(kind = %R::KIND, id = resource.id(), status = response.status().as_u16(), "created resource");
        Ok(resource)
    }
}

impl<R, A: fmt::Debug> fmt::Debug for ResourceClient<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient").field("api", &self.api).finish()
    }
}

/// Serializes a payload into a request body.
fn encode<T: Serialize>(payload: &T) -> Result<Value, ClientError> {
    serde_json::to_value(payload).map_err(|err| ClientError::Encode(err.to_string()))
}
