//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install a JSON formatter filtered by `RUST_LOG` (falling back to
/// `default_directive`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_init_is_harmless() {
        super::init("debug");
        super::init("info");
        ::tracing::info!("still logging after double init");
    }
}
