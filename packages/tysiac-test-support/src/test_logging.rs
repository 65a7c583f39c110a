//! Unified test logging initialization
//!
//! One-time subscriber setup usable from both unit tests (via a `ctor` hook)
//! and integration tests (by calling [`init`] at the top of a test).

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The filter is read in this order of precedence:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, quiet)
///
/// Engine events are emitted at `debug`/`trace`, so `TEST_LOG=tysiac=trace`
/// shows every accepted action of a failing scenario.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time()
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}

/// Whether [`init`] has already run in this process.
pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}
