// system-tests/tests/suites/users.rs
// ============================================================================
// Module: User Resource Tests
// Description: List, read, create, update, and delete flows for users.
// Purpose: Check the users contract against the configured backend.
// Dependencies: system-tests helpers
// ============================================================================

//! User resource system tests.

use rand::Rng;
use social_api_assert::AssertionError;
use social_api_assert::assert_collection;
use social_api_assert::assert_status;
use social_api_assert::assert_user;
use social_api_assert::expect;
use social_api_assert::expect_field;
use social_api_assert::json_body;
use social_api_assert::validate_item;
use social_api_assert::validate_response;
use social_api_assert::validate_schema;
use social_api_client::HttpApi;
use social_api_client::StatusCode;
use social_api_client::UsersClient;
use social_api_core::MAX_USER_NAME_LENGTH;
use social_api_core::Resource;
use social_api_core::User;
use social_api_core::UserCreate;
use social_api_core::UserList;
use social_api_core::UserUpdate;
use social_api_core::parse_list;
use social_api_core::schema::error_body_schema;
use social_api_core::schema::user_create_schema;
use social_api_core::schema::user_update_schema;
use system_tests::fixtures::ResourceFixture;

use crate::helpers;
use crate::helpers::backend::suite;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Ids the service is seeded with.
const SEEDED_USER_IDS: std::ops::RangeInclusive<i64> = 1..=10;

#[test]
fn users_list_conforms_to_list_schema() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("users_list_conforms_to_list_schema", &clients.api)?;

    let users = list_users(&clients.users)?;

    reporter.finish("pass", vec![format!("{} users listed", users.len())])?;
    Ok(())
}

#[test]
fn user_listing_is_stable_until_a_user_is_created() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("user_listing_is_stable_until_a_user_is_created", &clients.api)?;

    let first = list_users(&clients.users)?;
    let second = list_users(&clients.users)?;
    assert_collection(first.items(), second.items())?;

    let fixture = ResourceFixture::create(&clients.users)?;
    let grown = list_users(&clients.users)?;
    let outcome = assert_collection(first.items(), grown.items());
    if !matches!(outcome, Err(AssertionError::LengthMismatch { expected, actual }) if actual == expected + 1) {
        return Err("listing after a create must differ by exactly one user".into());
    }
    if !grown.items().contains(fixture.resource()) {
        return Err(format!("user {} missing from the listing", fixture.id()).into());
    }
    reporter.record_teardown(fixture.finish());

    let restored = list_users(&clients.users)?;
    assert_collection(first.items(), restored.items())?;

    reporter.finish("pass", vec![format!("{} users listed consistently", first.len())])?;
    Ok(())
}

#[test]
fn seeded_users_are_retrievable() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("seeded_users_are_retrievable", &clients.api)?;

    for id in SEEDED_USER_IDS {
        let response = clients.users.get(id)?;
        assert_status(&response, StatusCode::OK)?;
        let body = validate_response(&response, &User::item_schema())?;
        let user = User::from_json(&body)?;
        expect_field("id", user.id).to_be_equal(&id)?;
        assert_user(&body, &user)?;
    }

    reporter.finish("pass", vec!["seeded users 1..=10 retrieved".to_string()])?;
    Ok(())
}

#[test]
fn valid_user_payloads_are_created() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("valid_user_payloads_are_created", &clients.api)?;

    let longest_name = "n".repeat(MAX_USER_NAME_LENGTH);
    let payloads = vec![
        UserCreate::generated(),
        UserCreate::generated(),
        UserCreate::new("x", "x@example.org")?,
        UserCreate::new(longest_name, "longest.name@example.com")?,
    ];
    let mut created = Vec::new();
    for payload in &payloads {
        validate_schema(&serde_json::to_value(payload)?, &user_create_schema())?;
        let response = clients.users.create(payload)?;
        assert_status(&response, StatusCode::CREATED)?;
        let body = validate_response(&response, &User::item_schema())?;
        let user = User::from_json(&body)?;
        created.push(ResourceFixture::adopt(&clients.users, user));
        assert_user(&body, payload)?;
    }
    for fixture in created {
        reporter.record_teardown(fixture.finish());
    }

    reporter.finish("pass", vec![format!("{} payloads created", payloads.len())])?;
    Ok(())
}

#[test]
fn missing_user_returns_structured_404() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("missing_user_returns_structured_404", &clients.api)?;

    let id = rand::thread_rng().gen_range(1_000_000_000_i64..1_000_000_000_000);
    let response = clients.users.get(id)?;
    assert_status(&response, StatusCode::NOT_FOUND)?;
    let body = validate_response(&response, &error_body_schema())?;
    if validate_item::<User>(&body).is_ok() {
        return Err("404 body must not parse as a user".into());
    }

    reporter.finish("pass", vec![format!("user {id} not found")])?;
    Ok(())
}

#[test]
fn created_user_round_trips() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("created_user_round_trips", &clients.api)?;

    let payload = UserCreate::generated();
    let fixture = ResourceFixture::create_with(&clients.users, &payload)?;
    let response = clients.users.get(fixture.id())?;
    assert_status(&response, StatusCode::OK)?;
    let body = validate_response(&response, &User::item_schema())?;
    assert_user(&body, &payload)?;
    assert_user(&body, fixture.resource())?;
    reporter.record_teardown(fixture.finish());

    reporter.finish("pass", vec!["user round trip matched payload".to_string()])?;
    Ok(())
}

#[test]
fn user_reads_are_idempotent() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("user_reads_are_idempotent", &clients.api)?;

    let fixture = ResourceFixture::create(&clients.users)?;
    let first = clients.users.get(fixture.id())?;
    let second = clients.users.get(fixture.id())?;
    assert_status(&first, StatusCode::OK)?;
    assert_status(&second, StatusCode::OK)?;
    expect(json_body(&first)?).to_be_equal(&json_body(&second)?)?;
    reporter.record_teardown(fixture.finish());

    reporter.finish("pass", vec!["consecutive reads matched".to_string()])?;
    Ok(())
}

#[test]
fn update_replaces_user_fields() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("update_replaces_user_fields", &clients.api)?;

    let fixture = ResourceFixture::create(&clients.users)?;
    let payload = UserUpdate::generated();
    validate_schema(&serde_json::to_value(&payload)?, &user_update_schema())?;
    let response = clients.users.update(fixture.id(), &payload)?;
    assert_status(&response, StatusCode::OK)?;
    let body = validate_response(&response, &User::item_schema())?;
    assert_user(&body, &payload)?;

    let reread = clients.users.get(fixture.id())?;
    assert_status(&reread, StatusCode::OK)?;
    let reread = User::from_json(&json_body(&reread)?)?;
    assert_user(&reread, &payload)?;
    expect_field("id", reread.id()).to_be_equal(&fixture.id())?;
    reporter.record_teardown(fixture.finish());

    reporter.finish("pass", vec!["update replaced name and email".to_string()])?;
    Ok(())
}

#[test]
fn deleted_user_is_gone() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("deleted_user_is_gone", &clients.api)?;

    let fixture = ResourceFixture::create(&clients.users)?;
    let response = clients.users.delete(fixture.id())?;
    assert_status(&response, StatusCode::OK)?;
    assert_status(&clients.users.get(fixture.id())?, StatusCode::NOT_FOUND)?;
    reporter.record_teardown(fixture.finish());

    reporter.finish("pass", vec!["deleted user returned 404".to_string()])?;
    Ok(())
}

/// Lists users and checks the body against the list schema.
fn list_users<A: HttpApi>(users: &UsersClient<A>) -> Result<UserList, Box<dyn std::error::Error>> {
    let response = users.list()?;
    assert_status(&response, StatusCode::OK)?;
    let body = validate_response(&response, &User::list_schema())?;
    Ok(parse_list::<User>(&body)?)
}
