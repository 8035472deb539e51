// system-tests/src/fixtures/mod.rs
// ============================================================================
// Module: Test Fixtures
// Description: Resource lifecycle and run serialization for system tests.
// Purpose: Give each test its own resource and guarantee its deletion.
// Dependencies: social-api-client, social-api-core, tracing
// ============================================================================

//! ## Overview
//! A [`ResourceFixture`] creates one resource through a shared client, hands
//! it to the test body, and deletes it when the test ends, including when the
//! test unwinds. Teardown failures are logged and never replace the test's
//! own outcome. [`suite_lock`] keeps tests in one binary sequential.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod lock;
mod resource;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use lock::suite_lock;
pub use resource::FixtureError;
pub use resource::FixtureState;
pub use resource::ResourceFixture;
