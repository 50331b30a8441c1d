use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber used by the demo binaries.
///
/// Standard output is left to the demos' own results. The level defaults to
/// `warn` and can be raised with `RUST_LOG`. Call once, at the start of `main`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
