use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber at `level`.
///
/// With `from_env`, `RUST_LOG` takes precedence when it parses.
pub fn init(level: &str, from_env: bool) {
    let filter = if from_env {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}
