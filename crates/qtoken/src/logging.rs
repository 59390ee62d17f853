//! Structured logging setup

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter
pub const LOG_ENV: &str = "QTOKEN_LOG";

/// Pick the log filter: the command-line flag wins, then `QTOKEN_LOG`, then the
/// config file.
pub fn filter(flag: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    if let Some(level) = flag {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber, writing to stderr so command output stays clean.
pub fn init(flag: Option<&str>, config: &LoggingConfig) {
    let filter = filter(flag, config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
