/// Initializes the logging infrastructure for a mesh process.
///
/// Installs the global `tracing` fmt subscriber with environment-based
/// filtering. Verbosity is controlled through `RUST_LOG`:
///
/// - `RUST_LOG=info` - throughput samples and process lifecycle
/// - `RUST_LOG=debug` - plus link setup and teardown
/// - `RUST_LOG=trace` - plus one line per handled message
///
/// Call once at process start; tests should not call this.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
