//! Centralized logging configuration for the geo-space binary
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to executables, which call one of the functions below once at startup.

use tracing::Level;

/// Initialize the tracing subscriber with the standard configuration
///
/// Default log level: INFO (overrideable via RUST_LOG environment variable)
///
/// # Example
/// ```no_run
/// use geo_space::init_logger;
///
/// fn main() {
///     init_logger();
///     tracing::info!("Application started");
/// }
/// ```
///
/// # Environment Variables
/// ```bash
/// RUST_LOG=debug geo-space rotate --vector 1,0,0 --angle 1.57
/// RUST_LOG=geo_space=trace geo-space compass --count 8
/// ```
pub fn init_logger() {
    init_logger_with_level(Level::INFO)
}

/// Initialize the tracing subscriber with a custom default level
///
/// Only the first call installs a subscriber. Later calls keep it and emit a
/// `debug!` event through it.
///
/// # Arguments
/// * `default_level` - The default log level (overrideable via RUST_LOG)
pub fn init_logger_with_level(default_level: Level) {
    use tracing_subscriber::fmt::time::SystemTime;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_timer(SystemTime)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
    }
}
