// system-tests/src/bin/social_api_smoke.rs
// ============================================================================
// Module: Social API Smoke Runner
// Description: Command-line smoke run against a deployed social API.
// Purpose: Check the critical path of a live service without the test harness.
// Dependencies: clap, serde_jcs, social-api-client, system-tests
// ============================================================================

//! Smoke-test binary for the social media REST service.

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use social_api_client::HttpClient;
use system_tests::config::SystemTestConfig;
use system_tests::logging;
use system_tests::smoke::SmokeReport;
use system_tests::smoke::run_smoke;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Command-line options; each overrides its environment equivalent.
#[derive(Parser, Debug)]
#[command(name = "social-api-smoke", about = "Smoke-test a social media REST service")]
struct Cli {
    /// Base URL of the service (overrides `SOCIAL_API_BASE_URL`).
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Bearer token (overrides `SOCIAL_API_AUTH_TOKEN`).
    #[arg(long, value_name = "TOKEN")]
    auth_token: Option<String>,
    /// Request timeout in seconds (overrides `SOCIAL_API_TIMEOUT_SEC`).
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
    /// Emit the report as canonical JSON instead of text.
    #[arg(long)]
    json: bool,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    logging::init_stderr();
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err),
    }
}

/// Resolves configuration, runs the smoke checks, and prints the report.
fn run() -> Result<ExitCode, String> {
    let cli = Cli::parse();
    let mut config = SystemTestConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = Some(base_url);
    }
    if let Some(token) = cli.auth_token {
        config.auth_token = Some(token);
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = Some(Duration::from_secs(secs));
    }
    let auth = config.authentication()?;
    let client = HttpClient::with_timeout(config.base_url(), auth, config.timeout).map_err(|err| err.to_string())?;
    let report = run_smoke(&client);
    let output = if cli.json {
        let bytes = serde_jcs::to_vec(&report).map_err(|err| format!("report encoding failed: {err}"))?;
        String::from_utf8_lossy(&bytes).into_owned()
    } else {
        render_text(config.base_url(), &report)
    };
    write_stdout_line(&output).map_err(|err| format!("stdout write failed: {err}"))?;
    Ok(if report.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Renders the report as one line per check.
fn render_text(base_url: &str, report: &SmokeReport) -> String {
    let mut out = format!("smoke run against {base_url}\n");
    for check in &report.checks {
        let status = if check.passed { "ok" } else { "FAILED" };
        out.push_str(&format!("  {status:<6} {}", check.name));
        if let Some(detail) = &check.detail {
            out.push_str(&format!(": {detail}"));
        }
        out.push('\n');
    }
    let failed = report.failures().count();
    out.push_str(&format!("{} checks, {failed} failed", report.checks.len()));
    out
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(&mut stderr, "social-api-smoke: {message}");
    ExitCode::FAILURE
}
