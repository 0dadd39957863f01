use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr `tracing` subscriber so stdout carries only the report.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects `info` and `-vv` `debug`.
pub fn init(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
