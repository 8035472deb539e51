// system-tests/tests/suites/lifecycle.rs
// ============================================================================
// Module: Fixture Lifecycle Tests
// Description: Create-then-delete guarantees of resource fixtures.
// Purpose: Ensure every test leaves the service as it found it.
// Dependencies: system-tests helpers
// ============================================================================

//! Fixture lifecycle system tests.

use std::cell::Cell;
use std::panic::AssertUnwindSafe;

use social_api_assert::assert_status;
use social_api_assert::assert_user;
use social_api_assert::expect_field;
use social_api_assert::json_body;
use social_api_client::StatusCode;
use social_api_core::Resource;
use system_tests::fixtures::FixtureState;
use system_tests::fixtures::ResourceFixture;

use crate::helpers;
use crate::helpers::backend::suite;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn teardown_removes_user_fixture() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("teardown_removes_user_fixture", &clients.api)?;

    let fixture = ResourceFixture::create(&clients.users)?;
    expect_field("state", fixture.state().as_str()).to_be_equal(&FixtureState::Ready.as_str())?;
    let id = fixture.id();
    assert_status(&clients.users.get(id)?, StatusCode::OK)?;
    fixture.teardown()?;
    assert_status(&clients.users.get(id)?, StatusCode::NOT_FOUND)?;

    reporter.finish("pass", vec![format!("user {id} removed by teardown")])?;
    Ok(())
}

#[test]
fn finished_fixture_leaves_nothing_to_report() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("finished_fixture_leaves_nothing_to_report", &clients.api)?;

    let fixture = ResourceFixture::create(&clients.posts)?;
    let id = fixture.id();
    reporter.record_teardown(fixture.finish());
    if !reporter.teardown_failures().is_empty() {
        return Err(format!("post {id} teardown reported a failure").into());
    }
    assert_status(&clients.posts.get(id)?, StatusCode::NOT_FOUND)?;

    reporter.finish("pass", vec![format!("post {id} released without failures")])?;
    Ok(())
}

#[test]
fn dropped_post_fixture_is_deleted() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("dropped_post_fixture_is_deleted", &clients.api)?;

    let id = {
        let fixture = ResourceFixture::create(&clients.posts)?;
        assert_status(&clients.posts.get(fixture.id())?, StatusCode::OK)?;
        fixture.id()
    };
    assert_status(&clients.posts.get(id)?, StatusCode::NOT_FOUND)?;

    reporter.finish("pass", vec![format!("post {id} removed on drop")])?;
    Ok(())
}

#[test]
#[allow(clippy::panic, clippy::panic_in_result_fn, reason = "The test body panics on purpose.")]
fn unwinding_test_body_releases_fixture() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("unwinding_test_body_releases_fixture", &clients.api)?;

    let created = Cell::new(None);
    let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
        if let Ok(fixture) = ResourceFixture::create(&clients.users) {
            created.set(Some(fixture.id()));
        }
        panic!("simulated assertion failure");
    }));
    if outcome.is_ok() {
        return Err("test body should have panicked".into());
    }
    let id = created.get().ok_or("fixture was not created")?;
    assert_status(&clients.users.get(id)?, StatusCode::NOT_FOUND)?;

    reporter.finish("pass", vec![format!("user {id} removed during unwind")])?;
    Ok(())
}

#[test]
fn fixtures_are_isolated() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("fixtures_are_isolated", &clients.api)?;

    let first = ResourceFixture::create(&clients.users)?;
    let second = ResourceFixture::create(&clients.users)?;
    if first.id() == second.id() {
        return Err(format!("fixtures share id {}", first.id()).into());
    }
    let second_id = second.id();
    second.teardown()?;
    assert_status(&clients.users.get(first.id())?, StatusCode::OK)?;
    assert_status(&clients.users.get(second_id)?, StatusCode::NOT_FOUND)?;
    reporter.record_teardown(first.finish());

    reporter.finish("pass", vec!["fixtures kept distinct ids".to_string()])?;
    Ok(())
}

#[test]
fn create_with_defaults_returns_typed_resource() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("create_with_defaults_returns_typed_resource", &clients.api)?;

    let user = clients.users.create_with_defaults()?;
    let fixture = ResourceFixture::adopt(&clients.users, user);
    let response = clients.users.get(fixture.id())?;
    assert_status(&response, StatusCode::OK)?;
    assert_user(&json_body(&response)?, fixture.resource())?;
    expect_field("id", fixture.resource().id()).to_be_equal(&fixture.id())?;
    reporter.record_teardown(fixture.finish());

    reporter.finish("pass", vec!["default payload created a parsed user".to_string()])?;
    Ok(())
}
