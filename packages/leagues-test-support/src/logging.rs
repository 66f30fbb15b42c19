//! Test subscriber shared by unit and integration tests.
//!
//! Filter precedence is `TEST_LOG`, then `RUST_LOG`, then `warn`. Set
//! `TEST_LOG_FORMAT=json` to get one JSON object per event, matching the
//! server's production output.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the test subscriber once per process; later calls are no-ops.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let json = std::env::var("TEST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
        let builder = fmt().with_env_filter(filter()).with_test_writer();

        // try_init: another harness may already own the global subscriber
        let _ = if json {
            builder.json().flatten_event(true).try_init()
        } else {
            builder.without_time().compact().try_init()
        };
    });
}
