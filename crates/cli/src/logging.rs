//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};
use trading_journal_core::config::{LogFormat, LoggingConfig};

/// Initialize the global subscriber. `RUST_LOG` wins over the configured level.
/// Logs go to stderr so command output stays clean.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
