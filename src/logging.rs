use tracing_subscriber::filter::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Diagnostics go to stderr so stdout stays machine-readable. The default
/// level is `warn`; each `-v` on the command line raises it, and `RUST_LOG`
/// overrides everything.
pub fn set_up(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(max_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
