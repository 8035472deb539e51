// system-tests/src/logging.rs
// ============================================================================
// Module: Logging
// Description: Tracing subscriber setup for system tests and the smoke binary.
// Purpose: Install one subscriber per process, filtered by `RUST_LOG`.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! `RUST_LOG` selects the filter; without it only `info` and above are
//! shown. Initialization is idempotent so every test may call it.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Installs a subscriber that writes through the test harness capture.
pub fn init() {
    drop(registry().with(fmt::layer().with_test_writer()).with(env_filter()).try_init());
}

/// Installs a subscriber that writes to stderr, for command-line use.
pub fn init_stderr() {
    drop(
        registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(env_filter())
            .try_init(),
    );
}

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
