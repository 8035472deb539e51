// crates/social-api-client/src/response.rs
// ============================================================================
// Module: Raw Response
// Description: Status and body captured from one service call.
// Purpose: Hand responses to callers without interpreting the status.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! Raw responses; callers decide what a status means.

use reqwest::Method;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Response of a single request: status plus the undecoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Request method.
    method: Method,
    /// Fully-qualified request URL.
    url: String,
    /// Response status.
    status: StatusCode,
    /// Response body text.
    body: String,
}

impl RawResponse {
    /// Creates a response record.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>, status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Returns the request method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, ClientError> {
        self.json_as()
    }

    /// Decodes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body does not decode into `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|err| ClientError::Decode {
            url: self.url.clone(),
            message: err.to_string(),
        })
    }
}
