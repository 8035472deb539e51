// crates/social-api-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Failures raised by the HTTP facade and resource clients.
// Purpose: Separate transport failures from decoding and schema failures.
// Dependencies: thiserror, social-api-core
// ============================================================================

//! ## Overview
//! A non-2xx status is a response, not an error. [`ClientError`] covers
//! what happens before a response exists or after it fails to decode.

use social_api_core::ModelError;
use thiserror::Error;

/// Errors raised while talking to the service.
///
/// Non-2xx statuses are not errors at this layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL does not parse.
    #[error("invalid base url `{url}`: {message}")]
    InvalidUrl {
        /// Rejected URL.
        url: String,
        /// Parser message.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(String),
    /// Network or connection failure; never retried.
    #[error("{method} {url} failed: {message}")]
    Transport {
        /// Request method.
        method: String,
        /// Request URL.
        url: String,
        /// Transport message.
        message: String,
    },
    /// The response body is not valid JSON.
    #[error("response from {url} is not valid json: {message}")]
    Decode {
        /// Response URL.
        url: String,
        /// Decoder message.
        message: String,
    },
    /// A payload could not be serialized into a request body.
    #[error("request body serialization failed: {0}")]
    Encode(String),
    /// A body did not parse into the expected typed record.
    #[error(transparent)]
    Schema(#[from] ModelError),
}
