// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Tests
// Description: Critical-path checks against the configured backend.
// Purpose: Fast signal that the service and the harness work end to end.
// Dependencies: system-tests helpers
// ============================================================================

//! Smoke system tests.

use std::sync::Arc;

use social_api_client::FakeSocialService;
use social_api_client::HttpApi;
use social_api_client::HttpClient;
use social_api_core::Authentication;
use system_tests::smoke::run_smoke;

use crate::helpers;
use crate::helpers::backend::SharedApi;
use crate::helpers::backend::suite;
use crate::helpers::service_stub::spawn_service_stub;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn smoke_checks_pass_on_configured_backend() -> TestResult {
    let clients = suite()?;
    let (_lock, mut reporter) = helpers::begin("smoke_checks_pass_on_configured_backend", &clients.api)?;

    let report = run_smoke(&clients.api);
    reporter.artifacts().write_json("smoke_report.json", &report)?;
    if !report.passed() {
        let failed: Vec<_> = report.failures().map(|check| check.name).collect();
        return Err(format!("smoke checks failed on {} backend: {failed:?}", clients.backend).into());
    }

    reporter.finish("pass", vec![format!("{} smoke checks passed", report.checks.len())])?;
    Ok(())
}

#[test]
fn smoke_checks_pass_through_http_client() -> TestResult {
    let stub = spawn_service_stub(Arc::new(FakeSocialService::new()))?;
    let client = HttpClient::with_timeout(stub.base_url(), Authentication::default(), None)?;
    let api: SharedApi = Arc::new(client);
    let (_lock, mut reporter) = helpers::begin("smoke_checks_pass_through_http_client", &api)?;

    let report = run_smoke(&api);
    if !report.passed() {
        return Err(format!("smoke checks failed over loopback: {:?}", report.checks).into());
    }
    if stub.service().users().len() != 10 || stub.service().posts().len() != 10 {
        return Err("smoke run left records behind".into());
    }
    let transcript = api.transcript();
    if transcript.iter().any(|entry| entry.error.is_some()) {
        return Err("transcript recorded transport errors".into());
    }

    reporter.finish("pass", vec![format!("{} requests over loopback", transcript.len())])?;
    Ok(())
}
