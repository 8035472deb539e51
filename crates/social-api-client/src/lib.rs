// crates/social-api-client/src/lib.rs
// ============================================================================
// Module: Social API Client Library
// Description: HTTP facade and typed resource clients for the social service.
// Purpose: Issue verb-scoped requests and return raw responses to callers.
// Dependencies: crate::{error, fake, http, resource, response, transcript}
// ============================================================================

//! ## Overview
//! [`HttpApi`] is the capability seam: [`HttpClient`] sends requests over
//! the network with `reqwest`, while [`FakeSocialService`] answers the same
//! calls from memory. [`ResourceClient`] builds typed payloads on top of
//! either and never raises on a non-2xx status; status checks belong to the
//! caller.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod fake;
pub mod http;
pub mod resource;
pub mod response;
pub mod transcript;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ClientError;
pub use fake::FakeSocialService;
pub use http::HttpApi;
pub use http::HttpClient;
pub use reqwest::Method;
pub use reqwest::StatusCode;
pub use resource::PostsClient;
pub use resource::ResourceClient;
pub use resource::UsersClient;
pub use response::RawResponse;
pub use transcript::Transcript;
pub use transcript::TranscriptEntry;
