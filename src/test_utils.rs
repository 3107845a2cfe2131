#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for TextMatch unit tests.
//!
//! This module provides common test infrastructure used across multiple test
//! modules. It is only compiled during testing (`#[cfg(test)]`).

use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Global mutex to serialize tests that modify process environment variables
/// (APPDATA, TEXTMATCH_API_URL). This prevents race conditions when multiple
/// tests run in parallel and read or write the same variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that sets or unsets one environment variable for a test scope
/// and restores the original value when dropped.
///
/// # Safety Considerations
///
/// This guard uses `std::env::set_var` and `std::env::remove_var`, which are
/// marked unsafe because they can cause data races when other threads read
/// environment variables concurrently.
///
/// **Safety Invariants:**
/// 1. `ENV_LOCK` ensures tests modify the environment serially, never
///    concurrently; the lock is held for the guard's whole lifetime
/// 2. The guard is RAII-based and restores the original value on drop,
///    preventing environment pollution between tests
/// 3. Each test runs in its own thread with an isolated stack frame, and the
///    modification is scoped to the test function's lifetime
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
    // Lock guard must be held for the lifetime of this struct to ensure
    // exclusive access to the environment across parallel tests
    _lock: MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables with documented safety invariants"
)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: &'static str, value: &str) -> Self {
        let lock = ENV_LOCK.lock().unwrap();
        let original = std::env::var(key).ok();
        // SAFETY: ENV_LOCK serializes all environment mutation across tests,
        // and Drop restores the original value. See struct-level docs.
        unsafe {
            std::env::set_var(key, value);
        }
        Self {
            key,
            original,
            _lock: lock,
        }
    }

    /// Remove `key` from the environment until the guard is dropped.
    pub fn unset(key: &'static str) -> Self {
        let lock = ENV_LOCK.lock().unwrap();
        let original = std::env::var(key).ok();
        // SAFETY: as in `set`; serialized by ENV_LOCK, restored on drop.
        unsafe {
            std::env::remove_var(key);
        }
        Self {
            key,
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables with documented safety invariants"
)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: still holding ENV_LOCK; restoring the pre-guard state.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(self.key, original);
            }
        } else {
            unsafe {
                std::env::remove_var(self.key);
            }
        }
    }
}
