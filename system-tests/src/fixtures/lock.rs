// system-tests/src/fixtures/lock.rs
// ============================================================================
// Module: Suite Lock
// Description: Process-wide lock serializing system tests.
// Purpose: Keep tests against the shared service sequential.
// Dependencies: std
// ============================================================================

//! Process-wide suite lock.

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;
use std::sync::PoisonError;

/// Acquires the suite lock for the duration of one test.
///
/// A test that panicked while holding the lock does not block the rest of
/// the run.
pub fn suite_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(PoisonError::into_inner)
}
