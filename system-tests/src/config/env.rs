// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: social-api-core
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use social_api_core::AuthUser;
use social_api_core::Authentication;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Host tested when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://pitch.me";

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Base URL of the service under test.
    BaseUrl,
    /// Backend selection (`fake`, `stub`, or `live`).
    Backend,
    /// Optional bearer token.
    AuthToken,
    /// Optional credential email; requires the password.
    AuthEmail,
    /// Optional credential password; requires the email.
    AuthPassword,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional run root override.
    RunRoot,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "SOCIAL_API_BASE_URL",
            Self::Backend => "SOCIAL_API_BACKEND",
            Self::AuthToken => "SOCIAL_API_AUTH_TOKEN",
            Self::AuthEmail => "SOCIAL_API_AUTH_EMAIL",
            Self::AuthPassword => "SOCIAL_API_AUTH_PASSWORD",
            Self::TimeoutSeconds => "SOCIAL_API_TIMEOUT_SEC",
            Self::RunRoot => "SOCIAL_API_RUN_ROOT",
        }
    }
}

/// Service implementation the suites run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// In-memory fake, no network.
    #[default]
    Fake,
    /// The fake served over loopback HTTP through the real client.
    Stub,
    /// The service at the configured base URL.
    Live,
}

impl Backend {
    /// Returns the configuration literal for the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fake => "fake",
            Self::Stub => "stub",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fake" => Ok(Self::Fake),
            "stub" => Ok(Self::Stub),
            "live" => Ok(Self::Live),
            _ => Err(format!("{} must be fake, stub, or live", SystemTestEnv::Backend.as_str())),
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Optional base URL override.
    pub base_url: Option<String>,
    /// Selected backend.
    pub backend: Backend,
    /// Optional bearer token.
    pub auth_token: Option<String>,
    /// Optional credential pair (email, password).
    pub auth_user: Option<(String, String)>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or backend name).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?;
        let backend = read_env_nonempty(SystemTestEnv::Backend.as_str())?
            .map(|value| value.parse::<Backend>())
            .transpose()?
            .unwrap_or_default();
        let auth_token = read_env_nonempty(SystemTestEnv::AuthToken.as_str())?;
        let auth_user = match (
            read_env_nonempty(SystemTestEnv::AuthEmail.as_str())?,
            read_env_nonempty(SystemTestEnv::AuthPassword.as_str())?,
        ) {
            (Some(email), Some(password)) => Some((email, password)),
            (None, None) => None,
            _ => {
                return Err(format!(
                    "{} and {} must be set together",
                    SystemTestEnv::AuthEmail.as_str(),
                    SystemTestEnv::AuthPassword.as_str()
                ));
            }
        };
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        Ok(Self {
            base_url,
            backend,
            auth_token,
            auth_user,
            timeout,
            run_root,
        })
    }

    /// Returns the configured base URL or the default test host.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Builds request credentials, falling back to the demo pair.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured credentials are unusable.
    pub fn authentication(&self) -> Result<Authentication, String> {
        let user = self.auth_user.as_ref().map(|(email, password)| AuthUser::new(email, password));
        if self.auth_token.is_none() && user.is_none() {
            return Ok(Authentication::default());
        }
        Authentication::new(self.auth_token.clone(), user).map_err(|err| err.to_string())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
