pub mod middleware;

pub use middleware::RequestExtension;

use tracing_subscriber::EnvFilter;

/// Human readable output for debug builds, JSON lines for release builds.
/// Verbosity is controlled via RUST_LOG and defaults to info.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cfg!(debug_assertions) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    }
}
