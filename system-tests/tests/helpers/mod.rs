// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for the social API system-tests.
// Purpose: Provide backend selection, the loopback stub, and artifact utilities.
// Dependencies: system-tests, social-api-client
// ============================================================================

//! ## Overview
//! Shared helpers for the social API system-tests.
//! Invariants:
//! - One set of clients per test binary; one fixture per test.
//! - Scripted scenarios run against a fresh in-memory service.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod backend;
pub mod service_stub;

use std::sync::MutexGuard;

use self::artifacts::TestReporter;
use self::backend::SharedApi;

/// Serializes the test and opens its reporter.
pub fn begin(test_name: &str, api: &SharedApi) -> std::io::Result<(MutexGuard<'static, ()>, TestReporter)> {
    let lock = system_tests::fixtures::suite_lock();
    system_tests::logging::init();
    let reporter = TestReporter::new(test_name, api)?;
    Ok((lock, reporter))
}
