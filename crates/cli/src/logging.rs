//! Logging setup.

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`
/// (or `debug` with `--verbose`).
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
