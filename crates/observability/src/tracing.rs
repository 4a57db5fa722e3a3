//! Tracing/logging initialization.
//!
//! The client emits one event per HTTP round trip (method, path, status,
//! correlation id); hosts call one of these before constructing an
//! `ApiClient` so those events land somewhere.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the process, filtered via `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    init_with(filter);
}

/// Initialize logging with an explicit filter directive, for hosts that
/// configure verbosity themselves instead of through the environment.
pub fn init_with_filter(directive: &str) {
    init_with(EnvFilter::new(directive));
}

fn init_with(filter: EnvFilter) {
    // JSON lines so the events can be shipped alongside the backend logs
    // and joined on correlationId.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
