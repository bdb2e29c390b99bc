use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// Defaults to `info`; override with `RUST_LOG`. Calling it twice is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
