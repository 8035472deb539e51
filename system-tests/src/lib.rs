// system-tests/src/lib.rs
// ============================================================================
// Module: Social API System Tests Library
// Description: Shared configuration, fixtures, and smoke checks.
// Purpose: Provide common utilities for the system-test binaries.
// Dependencies: social-api-core, social-api-client, social-api-assert
// ============================================================================

//! ## Overview
//! This crate hosts configuration, the resource fixture, logging setup, and
//! the smoke run shared by the `social-api-smoke` binary and the suites in
//! `system-tests/tests`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod smoke;
