// system-tests/src/smoke.rs
// ============================================================================
// Module: Smoke Run
// Description: Critical-path checks against any social API backend.
// Purpose: Shared by the `social-api-smoke` binary and the smoke suite.
// Dependencies: social-api-assert, social-api-client, social-api-core, tracing
// ============================================================================

//! ## Overview
//! A smoke run lists both collections, reads a seeded user, and takes one
//! user and one post through create, read, and delete. Every check runs even
//! when an earlier one fails; the report records each outcome.

use std::error::Error;

use serde::Serialize;
use social_api_assert::assert_post;
use social_api_assert::assert_status;
use social_api_assert::assert_user;
use social_api_assert::json_body;
use social_api_assert::validate_item;
use social_api_assert::validate_list;
use social_api_client::HttpApi;
use social_api_client::PostsClient;
use social_api_client::ResourceClient;
use social_api_client::StatusCode;
use social_api_client::UsersClient;
use social_api_core::Resource;
use social_api_core::User;
use tracing::info;
use tracing::warn;

use crate::fixtures::ResourceFixture;

/// Seeded user read by the smoke run.
pub const SMOKE_USER_ID: i64 = 1;

/// Result type of a single smoke check.
type CheckResult = Result<(), Box<dyn Error>>;

/// Outcome of one smoke check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmokeCheck {
    /// Check name.
    pub name: &'static str,
    /// Whether the check passed.
    pub passed: bool,
    /// Failure description for failed checks.
    pub detail: Option<String>,
}

/// Outcomes of a whole smoke run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SmokeReport {
    /// Individual check outcomes.
    pub checks: Vec<SmokeCheck>,
}

impl SmokeReport {
    /// Returns true when every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    /// Returns the failed checks.
    pub fn failures(&self) -> impl Iterator<Item = &SmokeCheck> {
        self.checks.iter().filter(|check| !check.passed)
    }

    /// Runs one check and records its outcome.
    fn record(&mut self, name: &'static str, check: impl FnOnce() -> CheckResult) {
        let detail = match check() {
            Ok(()) => {
                info!(check = name, "smoke check passed");
                None
            }
            Err(err) => {
                warn!(check = name, error = %err, "smoke check failed");
                Some(err.to_string())
            }
        };
        self.checks.push(SmokeCheck {
            name,
            passed: detail.is_none(),
            detail,
        });
    }
}

/// Runs the smoke checks against `api`.
pub fn run_smoke<A: HttpApi + Clone>(api: &A) -> SmokeReport {
    let users: UsersClient<A> = ResourceClient::new(api.clone());
    let posts: PostsClient<A> = ResourceClient::new(api.clone());
    let mut report = SmokeReport::default();
    report.record("list_users", || list_conforms(&users));
    report.record("get_seeded_user", || {
        let response = users.get(SMOKE_USER_ID)?;
        assert_status(&response, StatusCode::OK)?;
        validate_item::<User>(&json_body(&response)?)?;
        Ok(())
    });
    report.record("user_lifecycle", || {
        let fixture = ResourceFixture::create(&users)?;
        let response = users.get(fixture.id())?;
        assert_status(&response, StatusCode::OK)?;
        assert_user(&json_body(&response)?, fixture.resource())?;
        deleted_is_gone(&users, fixture)
    });
    report.record("list_posts", || list_conforms(&posts));
    report.record("post_lifecycle", || {
        let fixture = ResourceFixture::create(&posts)?;
        let response = posts.get(fixture.id())?;
        assert_status(&response, StatusCode::OK)?;
        assert_post(&json_body(&response)?, fixture.resource())?;
        deleted_is_gone(&posts, fixture)
    });
    report
}

/// Lists a collection and validates it against the list schema.
fn list_conforms<R: Resource, A: HttpApi>(client: &ResourceClient<R, A>) -> CheckResult {
    let response = client.list()?;
    assert_status(&response, StatusCode::OK)?;
    validate_list::<R>(&json_body(&response)?)?;
    Ok(())
}

/// Deletes a fixture's resource and checks it is no longer served.
fn deleted_is_gone<R: Resource, A: HttpApi>(
    client: &ResourceClient<R, A>,
    fixture: ResourceFixture<'_, R, A>,
) -> CheckResult {
    let id = fixture.id();
    assert_status(&client.delete(id)?, StatusCode::OK)?;
    assert_status(&client.get(id)?, StatusCode::NOT_FOUND)?;
    if let Some(err) = fixture.finish() {
        warn!(id, error = %err, "smoke fixture left behind");
    }
    Ok(())
}
