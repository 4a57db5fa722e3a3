//! `stocklink-observability` — logging setup for client hosts.

pub mod tracing;

pub use self::tracing::{init, init_with_filter};
