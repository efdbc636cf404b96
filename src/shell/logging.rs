use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` wins over `default_filter`. Output goes to stderr so it does
/// not interleave with the menu on stdout.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
