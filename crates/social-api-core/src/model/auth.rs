// crates/social-api-core/src/model/auth.rs
// ============================================================================
// Module: Authentication
// Description: Credentials passed through to the HTTP transport.
// Purpose: Enforce that a token or a credential pair is always present.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Credentials are passed through to the service unchanged. A bearer token
//! takes precedence over an email and password pair; with neither set the
//! demo account is used.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ModelError;

/// Demo account email used when no credentials are supplied.
pub const DEMO_EMAIL: &str = "arob.v@email.ru";
/// Demo account password used when no credentials are supplied.
pub const DEMO_PASSWORD: &str = "password";

/// Email and password credential pair.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl AuthUser {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for AuthUser {
    fn default() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

impl fmt::Debug for AuthUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials for the service under test.
///
/// At least one of `auth_token` or `user` is present; this is checked once
/// in [`Authentication::new`] rather than at request time.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Authentication {
    /// Bearer token, preferred when present.
    auth_token: Option<String>,
    /// Credential pair.
    user: Option<AuthUser>,
}

/// Borrowed view of the credentials to send with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials<'a> {
    /// `Authorization: Bearer <token>`.
    Bearer(&'a str),
    /// `Authorization: Basic <email:password>`.
    Basic {
        /// Account email.
        email: &'a str,
        /// Account password.
        password: &'a str,
    },
}

impl Authentication {
    /// Builds credentials from an optional token and an optional user.
    ///
    /// Empty or whitespace tokens count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingCredentials`] when neither is present.
    pub fn new(auth_token: Option<String>, user: Option<AuthUser>) -> Result<Self, ModelError> {
        let auth_token = auth_token.filter(|token| !token.trim().is_empty());
        if auth_token.is_none() && user.is_none() {
            return Err(ModelError::MissingCredentials);
        }
        Ok(Self {
            auth_token,
            user,
        })
    }

    /// Builds token-only credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingCredentials`] when the token is empty.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ModelError> {
        Self::new(Some(token.into()), None)
    }

    /// Builds credentials from an email and password.
    #[must_use]
    pub fn with_user(user: AuthUser) -> Self {
        Self {
            auth_token: None,
            user: Some(user),
        }
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Returns the credential pair, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Returns the credentials to attach to a request; the token wins.
    #[must_use]
    pub fn credentials(&self) -> Credentials<'_> {
        match (&self.auth_token, &self.user) {
            (Some(token), _) => Credentials::Bearer(token),
            (None, Some(user)) => Credentials::Basic {
                email: &user.email,
                password: &user.password,
            },
            // Unreachable through the constructors; fall back to the demo pair.
            (None, None) => Credentials::Basic {
                email: DEMO_EMAIL,
                password: DEMO_PASSWORD,
            },
        }
    }
}

impl Default for Authentication {
    fn default() -> Self {
        Self::with_user(AuthUser::default())
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}
