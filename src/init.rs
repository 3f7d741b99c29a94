//! Initialization that needs to be done on startup

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// Quiet by default; `RUST_LOG=resize_image=debug` shows every step.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    // a subscriber may already be installed when embedded, keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
