//! Tracing/logging setup shared by binaries and test harnesses.

/// Initialize process-wide tracing with the default `info` level.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize tracing with `default_directive` used when `RUST_LOG` is unset.
pub fn init_with_default(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
