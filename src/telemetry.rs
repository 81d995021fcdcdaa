//! Tracing subscriber setup for the command-line front end.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber described by `config`.
///
/// Logs go to stderr so that command output on stdout stays machine-readable.
/// `RUST_LOG`-style directives in `config.log_level` that fail to parse fall
/// back to `warn`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.is_json_logging() {
        builder.json().init();
    } else {
        builder.with_ansi(config.color).compact().init();
    }
}
