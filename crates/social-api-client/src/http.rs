// crates/social-api-client/src/http.rs
// ============================================================================
// Module: HTTP Client Facade
// Description: Verb-scoped requests against collection and item routes.
// Purpose: One network round-trip per call, no retries, no status checks.
// Dependencies: reqwest, serde_json, tracing, social-api-core
// ============================================================================

//! ## Overview
//! [`HttpApi`] is the transport-agnostic interface used by resource clients.
//! [`HttpClient`] implements it with a blocking `reqwest` client: it joins
//! the base URL with the route, sends JSON with the service's content type,
//! and passes credentials through unchanged. Redirect and timeout handling
//! are the transport defaults unless a timeout is configured explicitly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde_json::Value;
use social_api_core::Authentication;
use social_api_core::Credentials;
use tracing::debug;

use crate::error::ClientError;
use crate::response::RawResponse;
use crate::transcript::Transcript;
use crate::transcript::TranscriptEntry;

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

// ============================================================================
// SECTION: Interface
// ============================================================================

/// Verb-scoped access to the service.
///
/// Implementations return every response, whatever its status; only
/// transport failures are errors.
pub trait HttpApi: Send + Sync {
    /// Sends one request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure.
    fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<RawResponse, ClientError>;

    /// Returns the calls recorded so far.
    fn transcript(&self) -> Vec<TranscriptEntry> {
        Vec::new()
    }

    /// `GET {path}`.
    ///
    /// # Errors
    ///
    /// See [`HttpApi::send`].
    fn get(&self, path: &str) -> Result<RawResponse, ClientError> {
        self.send(Method::GET, path, None)
    }

    /// `POST {path}` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpApi::send`].
    fn post(&self, path: &str, body: &Value) -> Result<RawResponse, ClientError> {
        self.send(Method::POST, path, Some(body))
    }

    /// `PUT {path}` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpApi::send`].
    fn put(&self, path: &str, body: &Value) -> Result<RawResponse, ClientError> {
        self.send(Method::PUT, path, Some(body))
    }

    /// `DELETE {path}`.
    ///
    /// # Errors
    ///
    /// See [`HttpApi::send`].
    fn delete(&self, path: &str) -> Result<RawResponse, ClientError> {
        self.send(Method::DELETE, path, None)
    }
}

impl<T: HttpApi + ?Sized> HttpApi for Arc<T> {
    fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<RawResponse, ClientError> {
        (**self).send(method, path, body)
    }

    fn transcript(&self) -> Vec<TranscriptEntry> {
        (**self).transcript()
    }
}

impl<T: HttpApi + ?Sized> HttpApi for Box<T> {
    fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<RawResponse, ClientError> {
        (**self).send(method, path, body)
    }

    fn transcript(&self) -> Vec<TranscriptEntry> {
        (**self).transcript()
    }
}

// ============================================================================
// SECTION: Network Client
// ============================================================================

/// Blocking HTTP client bound to one base URL and one set of credentials.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// Underlying transport.
    client: Client,
    /// Credentials passed through on every request.
    auth: Authentication,
    /// Recorded calls.
    transcript: Transcript,
}

impl HttpClient {
    /// Creates a client using the transport's default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for an unparsable base URL and
    /// [`ClientError::Build`] when the transport cannot be constructed.
    pub fn new(base_url: impl Into<String>, auth: Authentication) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, auth, None)
    }

    /// Creates a client with an optional explicit timeout.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::new`].
    pub fn with_timeout(
        base_url: impl Into<String>,
        auth: Authentication,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|err| ClientError::InvalidUrl {
            url: base_url.clone(),
            message: err.to_string(),
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| ClientError::Build(err.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            auth,
            transcript: Transcript::new(),
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the credentials in use.
    #[must_use]
    pub const fn auth(&self) -> &Authentication {
        &self.auth
    }

    /// Joins the base URL with a route, adding a leading `/` when missing.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Executes one request without recording it.
    fn execute(&self, method: &Method, url: &str, body: Option<&Value>) -> Result<RawResponse, ClientError> {
        let mut request = self.client.request(method.clone(), url);
        request = match self.auth.credentials() {
            Credentials::Bearer(token) => request.bearer_auth(token),
            Credentials::Basic {
                email,
                password,
            } => request.basic_auth(email, Some(password)),
        };
        if let Some(body) = body {
            request = request.body(body.to_string());
        }
        let transport_error = |message: String| ClientError::Transport {
            method: method.to_string(),
            url: url.to_string(),
            message,
        };
        let response = request.send().map_err(|err| transport_error(err.to_string()))?;
        let status = response.status();
        let text = response.text().map_err(|err| transport_error(err.to_string()))?;
        Ok(RawResponse::new(method.clone(), url, status, text))
    }
}

impl HttpApi for HttpClient {
    fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<RawResponse, ClientError> {
        let url = self.url_for(path);
        let outcome = self.execute(&method, &url, body);
        match &outcome {
            Ok(response) => debug!(%method, %url, status = response.status().as_u16(), "request completed"),
            Err(err) => debug!(%method, %url, error = %err, "request failed"),
        }
        self.transcript.record(method.as_str(), path, body, &outcome);
        outcome
    }

    fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.snapshot()
    }
}
